//! Markdown document template for converted files.
//!
//! Rendering is pure: the caller reads the source bytes and writes the
//! result, so template logic never touches the filesystem and is testable
//! without one. Documents are assembled as bytes — source content is
//! embedded verbatim between the code fences, including content that is not
//! valid UTF-8.
//!
//! ## Document layout
//!
//! ````text
//! ---
//! sidebar_position: 3
//! ---
//! # parser.c
//!
//! ### File Info
//!
//! - Path: `compiler/parser.c`
//!
//! ### Content
//!
//! ```c
//! <verbatim source bytes>
//! ```
//! ````

/// Inputs for one rendered document.
#[derive(Debug)]
pub struct DocumentSource<'a> {
    /// Source base name, extension included — becomes the page heading.
    pub file_name: &'a str,
    /// Path relative to the source root, shown in the File Info section.
    pub relative_path: &'a str,
    /// 1-based ordinal among the file's siblings.
    pub position: usize,
    /// Fence language tag.
    pub language: &'a str,
    /// Verbatim source content.
    pub content: &'a [u8],
}

/// Front-matter block carrying the sidebar position.
pub fn front_matter(position: usize) -> String {
    format!("---\nsidebar_position: {position}\n---\n")
}

/// Render one source file as a Markdown documentation page.
pub fn render_document(doc: &DocumentSource) -> Vec<u8> {
    let head = format!(
        "{}# {}\n\n### File Info\n\n- Path: `{}`\n\n### Content\n\n```{}\n",
        front_matter(doc.position),
        doc.file_name,
        doc.relative_path,
        doc.language,
    );

    let mut out = Vec::with_capacity(head.len() + doc.content.len() + 8);
    out.extend_from_slice(head.as_bytes());
    out.extend_from_slice(doc.content);
    out.extend_from_slice(b"\n```\n");
    out
}
