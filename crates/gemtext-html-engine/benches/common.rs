// Benchmark helper functions - Rust's dead code analysis doesn't understand
// that these are used by benchmark files in the same directory
// See: https://users.rust-lang.org/t/cargo-rustc-benches-awarnings/110111/2
#[allow(dead_code)]
pub fn generate_gemtext_content(size: usize) -> String {
    let base = "# Title\n\n## Section\n\nParagraph with *some* content.\nA second line.\n\n* Bullet point\n* Another item\n\n=> gemini://example.org/ A link\n=> photo.png A photo\n\n> Quoted\n>\n> text\n\n```sh\necho \"Hello\"\n```\n\n";
    base.repeat(size)
}

#[allow(dead_code)]
pub fn generate_heading_heavy_content(headings: usize) -> String {
    let mut content = String::new();

    for section in 0..headings {
        // Every fourth heading repeats to exercise id deduplication
        content.push_str(&format!("## Section {}\n", section % 4));
        content.push_str("Some paragraph content with multiple sentences.\n\n");
    }

    content
}
