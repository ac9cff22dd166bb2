use axum::response::Html;

const INDEX_HTML: &str = r#"
    <h1>Hello Docker Compose Workshop!</h1>
    <form action="/upload" method="POST" enctype="multipart/form-data">
      <input type="file" name="file" />
      <button type="submit">Upload</button>
    </form>
    <form action="/message" method="POST">
      <input type="text" name="msg" placeholder="Message to store in DB"/>
      <button type="submit">Store</button>
    </form>
"#;

/// GET / — landing page with the upload and message forms.
pub async fn index() -> Html<&'static str> {
    Html(INDEX_HTML)
}
