//! Server-rendered pages.
//!
//! Two pages, built as plain strings: the submission form and the
//! result view. User-supplied text is escaped before interpolation.

/// Escapes text for interpolation into HTML.
fn escape(value: &str) -> String {
	let mut escaped = String::with_capacity(value.len());
	for ch in value.chars() {
		match ch {
			'&' => escaped.push_str("&amp;"),
			'<' => escaped.push_str("&lt;"),
			'>' => escaped.push_str("&gt;"),
			'"' => escaped.push_str("&quot;"),
			'\'' => escaped.push_str("&#39;"),
			_ => escaped.push(ch),
		}
	}
	escaped
}

/// `GET /` — the submission form.
pub fn index_page() -> String {
	r#"<!DOCTYPE html>
<html>
<head>
  <meta charset="utf-8">
  <title>Seatcheck</title>
</head>
<body>
  <h1>Course vacancy check</h1>
  <form action="/check" method="post">
    <label>Course code <input type="text" name="course_code" required></label><br>
    <label>Slot letter <input type="text" name="slot_letter" maxlength="1" required></label><br>
    <label>Notify email <input type="email" name="email" required></label><br>
    <label>Portal username <input type="text" name="username" required></label><br>
    <label>Portal password <input type="password" name="password" required></label><br>
    <button type="submit">Check vacancy</button>
  </form>
</body>
</html>
"#
	.to_string()
}

/// `POST /check` — the outcome view.
pub fn result_page(outcome: &str, email_status: &str) -> String {
	format!(
		r#"<!DOCTYPE html>
<html>
<head>
  <meta charset="utf-8">
  <title>Seatcheck result</title>
</head>
<body>
  <h1>Result</h1>
  <p>{}</p>
  <p>{}</p>
  <p><a href="/">Check another course</a></p>
</body>
</html>
"#,
		escape(outcome),
		escape(email_status)
	)
}
