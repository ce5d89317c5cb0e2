//! Benchmarks for pdfsect extraction performance.
//!
//! Run with: cargo bench
//!
//! Text benchmarks use a synthetic paper; the load benchmark builds a
//! small PDF with lopdf.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use lopdf::content::{Content, Operation};
use lopdf::{dictionary, Document, Object, Stream};

use pdfsect::heading::HeadingDetector;
use pdfsect::normalize::{NormalizeOptions, TextNormalizer};
use pdfsect::split::split_sections;
use pdfsect::{ExtractOptions, SectionExtractor};

const HEADINGS: &[&str] = &[
    "Introduction",
    "Related Literature",
    "Data and Methodology",
    "Empirical Results",
    "Robustness Checks",
    "Discussion",
    "Conclusion",
];

/// Creates raw text resembling a paper with `paragraphs` body lines per section.
fn create_test_text(paragraphs: usize) -> String {
    let mut text = String::from("Title\nTime Series Momentum Revisited\nAuthor\nA. Researcher\n");
    for (i, heading) in HEADINGS.iter().enumerate() {
        text.push_str(&format!("{}. {}\n", i + 1, heading));
        for p in 0..paragraphs {
            text.push_str(&format!(
                "Returns over the past twelve months predict returns in month {}. See https://ssrn.com/abstract={}\n",
                p, p
            ));
        }
        text.push_str(&format!(
            "Electronic copy available at: https://ssrn.com/abstract={}\n\n{}\n\n",
            i,
            i + 1
        ));
    }
    text
}

/// Creates a PDF with one section heading and a few body lines per page.
fn create_test_pdf(page_count: usize) -> Vec<u8> {
    let mut doc = Document::with_version("1.5");
    let pages_id = doc.new_object_id();
    let font_id = doc.add_object(dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => "Helvetica",
        "Encoding" => "WinAnsiEncoding",
    });
    let resources_id = doc.add_object(dictionary! {
        "Font" => dictionary! { "F1" => font_id },
    });

    let mut kids: Vec<Object> = Vec::new();
    for i in 0..page_count {
        let heading = HEADINGS[i % HEADINGS.len()];
        let lines = [
            heading,
            "Momentum strategies buy past winners.",
            "They sell past losers.",
        ];
        let mut operations = Vec::new();
        for (n, line) in lines.iter().enumerate() {
            operations.push(Operation::new("BT", vec![]));
            operations.push(Operation::new("Tf", vec!["F1".into(), 12.into()]));
            operations.push(Operation::new(
                "Td",
                vec![72.into(), (700 - 20 * n as i64).into()],
            ));
            operations.push(Operation::new("Tj", vec![Object::string_literal(*line)]));
            operations.push(Operation::new("ET", vec![]));
        }
        let encoded = Content { operations }.encode().unwrap_or_default();
        let content_id = doc.add_object(Stream::new(dictionary! {}, encoded));
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

    let mut data = Vec::new();
    let _ = doc.save_to(&mut data);
    data
}

/// Benchmark text normalization.
fn bench_normalize(c: &mut Criterion) {
    let text = create_test_text(50);
    let normalizer = TextNormalizer::new(NormalizeOptions::default()).unwrap();
    let rewrites_only = TextNormalizer::new(NormalizeOptions::rewrites_only()).unwrap();

    c.bench_function("normalize", |b| {
        b.iter(|| normalizer.normalize(black_box(&text)));
    });

    c.bench_function("normalize_rewrites_only", |b| {
        b.iter(|| rewrites_only.normalize(black_box(&text)));
    });
}

/// Benchmark heading detection with and without the sentence pass.
fn bench_heading_detection(c: &mut Criterion) {
    let normalizer = TextNormalizer::new(NormalizeOptions::default()).unwrap();
    let text = normalizer.normalize(&create_test_text(50));
    let full = HeadingDetector::new().unwrap();
    let rule_only = HeadingDetector::rule_only().unwrap();

    c.bench_function("detect_headings", |b| {
        b.iter(|| full.detect(black_box(&text)));
    });

    c.bench_function("detect_headings_rule_only", |b| {
        b.iter(|| rule_only.detect(black_box(&text)));
    });
}

/// Benchmark splitting at various document sizes.
fn bench_split(c: &mut Criterion) {
    let normalizer = TextNormalizer::new(NormalizeOptions::default()).unwrap();
    let detector = HeadingDetector::rule_only().unwrap();
    let mut group = c.benchmark_group("split");

    for paragraphs in [10, 100, 1000].iter() {
        let text = normalizer.normalize(&create_test_text(*paragraphs));
        let headings = detector.detect(&text);

        group.bench_function(format!("{}_paragraphs", paragraphs), |b| {
            b.iter(|| split_sections(black_box(&text), &headings));
        });
    }

    group.finish();
}

/// Benchmark the whole pipeline from PDF bytes.
fn bench_extract_pdf(c: &mut Criterion) {
    let mut group = c.benchmark_group("extract_pdf");
    let extractor = SectionExtractor::new();
    let rule_only = SectionExtractor::with_options(ExtractOptions::new().rule_headings_only());

    for page_count in [1, 10].iter() {
        let data = create_test_pdf(*page_count);

        group.bench_function(format!("{}_pages", page_count), |b| {
            b.iter(|| extractor.extract_bytes(black_box(&data)));
        });

        group.bench_function(format!("{}_pages_rule_only", page_count), |b| {
            b.iter(|| rule_only.extract_bytes(black_box(&data)));
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_normalize,
    bench_heading_detection,
    bench_split,
    bench_extract_pdf
);
criterion_main!(benches);
