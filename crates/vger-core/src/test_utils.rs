//! Test utilities for building in-memory ZIP archives and PDF letters.
//!
//! # Panics
//!
//! All functions in this module may panic on I/O errors since they are
//! designed for test use only where panics are acceptable.

#![allow(clippy::unwrap_used, clippy::missing_panics_doc)]

use std::io::Cursor;
use std::io::Write;

use lopdf::Document;
use lopdf::Object;
use lopdf::Stream;
use lopdf::content::Content;
use lopdf::content::Operation;
use lopdf::dictionary;
use zip::CompressionMethod;
use zip::write::SimpleFileOptions;
use zip::write::ZipWriter;

/// Creates an in-memory ZIP archive from `(name, content)` pairs, stored
/// uncompressed.
///
/// # Examples
///
/// ```
/// use vger_core::test_utils::create_test_zip;
///
/// let zip_data = create_test_zip(&[("file.txt", b"hello"), ("dir/nested.txt", b"world!")]);
/// assert!(zip_data.starts_with(b"PK"));
/// ```
#[must_use]
pub fn create_test_zip(entries: &[(&str, &[u8])]) -> Vec<u8> {
    write_zip(entries, CompressionMethod::Stored)
}

/// Creates an in-memory ZIP archive with deflate-compressed members.
#[must_use]
pub fn create_deflated_zip(entries: &[(&str, &[u8])]) -> Vec<u8> {
    write_zip(entries, CompressionMethod::Deflated)
}

fn write_zip(entries: &[(&str, &[u8])], method: CompressionMethod) -> Vec<u8> {
    let mut zip = ZipWriter::new(Cursor::new(Vec::new()));
    let options = SimpleFileOptions::default()
        .compression_method(method)
        .unix_permissions(0o644);

    for (name, data) in entries {
        zip.start_file(*name, options).unwrap();
        zip.write_all(data).unwrap();
    }

    zip.finish().unwrap().into_inner()
}

/// Builder for a container archive holding nested archives, mirroring how
/// multi-part returns are delivered.
///
/// # Examples
///
/// ```
/// use vger_core::test_utils::NestedZipBuilder;
///
/// let builder = NestedZipBuilder::new()
///     .add_nested("part-1.zip", &[("mail.mbox", b"...")])
///     .add_file("index.html", b"<html></html>");
/// let nested_bytes = builder.member_bytes(0).to_vec();
/// let container = builder.build();
/// assert!(!nested_bytes.is_empty());
/// assert!(!container.is_empty());
/// ```
#[derive(Debug, Default)]
pub struct NestedZipBuilder {
    members: Vec<(String, Vec<u8>, bool)>,
}

impl NestedZipBuilder {
    /// Creates an empty builder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a nested archive built from `entries`.
    #[must_use]
    pub fn add_nested(mut self, name: &str, entries: &[(&str, &[u8])]) -> Self {
        self.members
            .push((name.to_string(), create_deflated_zip(entries), true));
        self
    }

    /// Adds a member with raw bytes. It counts as nested only if its name
    /// says so.
    #[must_use]
    pub fn add_file(mut self, name: &str, data: &[u8]) -> Self {
        self.members.push((name.to_string(), data.to_vec(), false));
        self
    }

    /// Bytes of the `index`-th member added with [`add_nested`](Self::add_nested).
    #[must_use]
    pub fn member_bytes(&self, index: usize) -> &[u8] {
        self.members
            .iter()
            .filter(|(_, _, nested)| *nested)
            .nth(index)
            .map(|(_, data, _)| data.as_slice())
            .unwrap()
    }

    /// Writes the container archive. Nested members are stored, since they
    /// are already compressed.
    #[must_use]
    pub fn build(&self) -> Vec<u8> {
        let entries: Vec<(&str, &[u8])> = self
            .members
            .iter()
            .map(|(name, data, _)| (name.as_str(), data.as_slice()))
            .collect();
        create_test_zip(&entries)
    }

    /// Writes the container archive with every member deflate-compressed.
    #[must_use]
    pub fn build_deflated(&self) -> Vec<u8> {
        let entries: Vec<(&str, &[u8])> = self
            .members
            .iter()
            .map(|(name, data, _)| (name.as_str(), data.as_slice()))
            .collect();
        create_deflated_zip(&entries)
    }
}

/// Creates an in-memory PDF with one page per string, each drawn as a single
/// line of Courier text.
///
/// # Examples
///
/// ```
/// use vger_core::test_utils::create_test_pdf;
///
/// let pdf = create_test_pdf(&["SHA512-a.zip:", "0123abcd"]);
/// assert!(pdf.starts_with(b"%PDF-1.5"));
/// ```
#[must_use]
pub fn create_test_pdf(pages: &[&str]) -> Vec<u8> {
    let mut doc = Document::with_version("1.5");
    let pages_id = doc.new_object_id();
    let font_id = doc.add_object(dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => "Courier",
        "Encoding" => "WinAnsiEncoding",
    });

    let mut kids: Vec<Object> = Vec::new();
    for text in pages {
        let content = Content {
            operations: vec![
                Operation::new("BT", vec![]),
                Operation::new("Tf", vec!["F1".into(), 12.into()]),
                Operation::new("Td", vec![50.into(), 700.into()]),
                Operation::new("Tj", vec![Object::string_literal(*text)]),
                Operation::new("ET", vec![]),
            ],
        };
        let content_id = doc.add_object(Stream::new(dictionary! {}, content.encode().unwrap()));
        let page_id = doc.add_object(dictionary! {
            "Type" => "Page",
            "Parent" => pages_id,
            "Contents" => content_id,
            "Resources" => dictionary! {
                "Font" => dictionary! { "F1" => font_id },
            },
        });
        kids.push(page_id.into());
    }

    let count = i64::try_from(kids.len()).unwrap();
    let pages_dict = dictionary! {
        "Type" => "Pages",
        "Kids" => kids,
        "Count" => count,
        "MediaBox" => vec![0.into(), 0.into(), 595.into(), 842.into()],
    };
    doc.objects.insert(pages_id, Object::Dictionary(pages_dict));

    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    doc.trailer.set("Root", catalog_id);

    let mut bytes = Vec::new();
    doc.save_to(&mut bytes).unwrap();
    bytes
}
