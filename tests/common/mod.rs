//! Synthetic PDF fixtures built with lopdf.

#![allow(dead_code)]

use std::path::{Path, PathBuf};

use lopdf::content::{Content, Operation};
use lopdf::encryption::{decrypt_object, get_encryption_key};
use lopdf::{dictionary, Document, Object, Stream, StringFormat};

/// Build a PDF where each inner slice is one page and each string is one
/// text line. An empty slice produces a page without text.
pub fn build_pdf(pages: &[&[&str]]) -> Vec<u8> {
    save(build_document(pages))
}

/// Build a PDF whose content streams are RC4-encrypted under an empty
/// user password. With `wrong_user_hash` the `/U` entry does not match,
/// so the empty password is rejected.
pub fn build_encrypted_pdf(pages: &[&[&str]], wrong_user_hash: bool) -> Vec<u8> {
    let mut doc = build_document(pages);

    let mut encrypt = dictionary! {
        "Filter" => "Standard",
        "V" => 1,
        "R" => 2,
        "Length" => 40,
        "O" => Object::String(vec![0x5A; 32], StringFormat::Hexadecimal),
        "P" => -44i64,
    };
    if wrong_user_hash {
        encrypt.set("U", Object::String(vec![0; 32], StringFormat::Hexadecimal));
    }
    let encrypt_id = doc.add_object(encrypt);

    let file_id = Object::String(b"pdfsect-fixture!".to_vec(), StringFormat::Hexadecimal);
    doc.trailer.set("ID", vec![file_id.clone(), file_id]);
    doc.trailer.set("Encrypt", encrypt_id);

    // RC4 is symmetric: running the decryption over plain content encrypts it.
    let key = get_encryption_key(&doc, "", false).unwrap();
    for (&id, object) in doc.objects.iter_mut() {
        if id == encrypt_id {
            continue;
        }
        if let Ok(cipher) = decrypt_object(&key, id, &*object) {
            if let Object::Stream(stream) = object {
                stream.set_content(cipher);
            }
        }
    }

    save(doc)
}

fn save(mut doc: Document) -> Vec<u8> {
    let mut data = Vec::new();
    doc.save_to(&mut data).unwrap();
    data
}

fn build_document(pages: &[&[&str]]) -> Document {
    let mut doc = Document::with_version("1.5");
    let pages_id = doc.new_object_id();

    let font_id = doc.add_object(dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => "Helvetica",
        "Encoding" => "WinAnsiEncoding",
    });
    let resources_id = doc.add_object(dictionary! {
        "Font" => dictionary! {
            "F1" => font_id,
        },
    });

    let mut kids: Vec<Object> = Vec::new();
    for lines in pages {
        let mut operations = Vec::new();
        for (i, line) in lines.iter().enumerate() {
            let y = 750 - 20 * i as i64;
            operations.push(Operation::new("BT", vec![]));
            operations.push(Operation::new("Tf", vec!["F1".into(), 12.into()]));
            operations.push(Operation::new("Td", vec![72.into(), y.into()]));
            operations.push(Operation::new("Tj", vec![Object::string_literal(*line)]));
            operations.push(Operation::new("ET", vec![]));
        }

        let content = Content { operations };
        let content_id = doc.add_object(Stream::new(dictionary! {}, content.encode().unwrap()));
        let page_id = doc.add_object(dictionary! {
            "Type" => "Page",
            "Parent" => pages_id,
            "Contents" => content_id,
        });
        kids.push(page_id.into());
    }

    let count = kids.len() as i64;
    doc.objects.insert(
        pages_id,
        Object::Dictionary(dictionary! {
            "Type" => "Pages",
            "Kids" => kids,
            "Count" => count,
            "Resources" => resources_id,
            "MediaBox" => vec![0.into(), 0.into(), 612.into(), 792.into()],
        }),
    );

    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    doc.trailer.set("Root", catalog_id);
    doc
}

/// Write a synthetic PDF into `dir` and return its path.
pub fn write_pdf(dir: &Path, name: &str, pages: &[&[&str]]) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, build_pdf(pages)).unwrap();
    path
}

/// A two-page momentum paper.
pub const PAPER: &[&[&str]] = &[
    &[
        "Introduction",
        "This strategy uses momentum.",
        "Electronic copy available at: https://ssrn.com/abstract=1",
        "14",
    ],
    &["Methodology", "We compute moving averages.", "Page 15"],
];
