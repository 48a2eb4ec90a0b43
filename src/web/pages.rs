// src/web/pages.rs
//! Static upload forms served on GET

pub const INDEX_PAGE: &str = r#"<!DOCTYPE html>
<html>
<head><meta charset="utf-8"><title>Resume ATS</title></head>
<body>
  <h1>Upload resumes</h1>
  <form method="post" action="/" enctype="multipart/form-data">
    <input type="file" name="resumes" accept=".pdf,.docx" multiple>
    <button type="submit">Upload</button>
  </form>
  <ul>
    <li><a href="/dashboard">Dashboard</a></li>
    <li><a href="/jd-upload">Match a job description</a></li>
    <li><a href="/export-csv">Export CSV</a></li>
  </ul>
  <form method="post" action="/clear-db">
    <button type="submit">Clear all candidates</button>
  </form>
</body>
</html>
"#;

pub const JD_UPLOAD_PAGE: &str = r#"<!DOCTYPE html>
<html>
<head><meta charset="utf-8"><title>Match job description</title></head>
<body>
  <h1>Match a job description</h1>
  <form method="post" action="/jd-upload" enctype="multipart/form-data">
    <input type="file" name="jd" accept=".pdf,.docx">
    <button type="submit">Find candidates</button>
  </form>
  <p><a href="/">Back</a></p>
</body>
</html>
"#;
