use moon::*;

async fn frontend() -> Frontend {
    Frontend::new()
        .title("AI Care — Healthcare Reinvented")
        .append_to_head(
            r#"<link rel="preconnect" href="https://fonts.googleapis.com">
<link rel="preconnect" href="https://fonts.gstatic.com" crossorigin>
<link href="https://fonts.googleapis.com/css2?family=Inter:wght@400;500;600;700&display=swap" rel="stylesheet">"#,
        )
        .append_to_head(
            r#"<style>
    html {
        background-color: oklch(99% 0.005 255);
    }
    body {
        margin: 0;
    }
</style>"#,
        )
}

// The site is fully static; nothing arrives from the frontend.
async fn up_msg_handler(_: UpMsgRequest<()>) {}

#[moon::main]
async fn main() -> std::io::Result<()> {
    start(frontend, up_msg_handler, |_| {}).await
}
