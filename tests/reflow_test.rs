//! End-to-end tests for the page reflow pipeline.

use pdf_reflow::{
    reflow_words, to_text, BlockChild, Document, Page, ReflowOptions, TextBlock, Word,
};

fn word(text: &str, x_min: f32, x_max: f32, y_min: f32, y_max: f32) -> Word {
    Word::new(text, x_min, x_max, y_min, y_max).unwrap()
}

fn page_of(words: Vec<Word>) -> Page {
    reflow_words(1, 595.0, 842.0, words, &ReflowOptions::default()).unwrap()
}

fn leaf_texts(block: &TextBlock, texts: &mut Vec<String>) {
    for child in block.children() {
        match child {
            BlockChild::Line(line) => texts.push(line.text()),
            BlockChild::Block(nested) => leaf_texts(nested, texts),
        }
    }
}

#[test]
fn test_two_paragraphs_reflow_in_reading_order() {
    let page = page_of(vec![
        word("The", 72.0, 100.0, 100.0, 112.0),
        word("quick", 104.0, 140.0, 100.0, 112.0),
        word("brown", 72.0, 112.0, 114.0, 126.0),
        word("fox", 116.0, 140.0, 114.0, 126.0),
        word("Second", 72.0, 130.0, 300.0, 312.0),
        word("paragraph", 134.0, 200.0, 300.0, 312.0),
    ]);

    assert_eq!(
        page.text(),
        "The quick\nbrown fox\n\nSecond paragraph\n\n"
    );
}

#[test]
fn test_split_word_repaired_through_pipeline() {
    let page = page_of(vec![
        word("Hel", 72.0, 90.0, 100.0, 112.0),
        word("lo", 90.1, 105.0, 100.0, 112.0),
        word("world", 110.0, 150.0, 100.0, 112.0),
    ]);

    assert_eq!(page.text(), "Hello world\n\n");
}

#[test]
fn test_hyphenation_repaired_through_pipeline() {
    let page = page_of(vec![
        word("multi-", 72.0, 110.0, 100.0, 112.0),
        word("ple", 72.0, 95.0, 114.0, 126.0),
        word("worked", 99.0, 140.0, 114.0, 126.0),
    ]);

    assert_eq!(page.text(), "multiple\nworked\n\n");
}

#[test]
fn test_heading_tagged_through_pipeline() {
    let page = page_of(vec![
        word("Annual", 72.0, 130.0, 50.0, 70.0),
        word("Report", 134.0, 200.0, 50.0, 70.0),
        word("first", 72.0, 100.0, 72.0, 84.0),
        word("body", 104.0, 140.0, 72.0, 84.0),
        word("second", 72.0, 110.0, 86.0, 98.0),
        word("body", 114.0, 150.0, 86.0, 98.0),
    ]);

    assert_eq!(
        page.text(),
        "#Annual Report\n\nfirst body\nsecond body\n\n"
    );
}

#[test]
fn test_upside_down_page_corrected() {
    // An upside-down page in content order: each logical line sits above
    // the previous one, words mirrored horizontally. 16 rows of 3 words
    // give 15 decreasing offsets, enough to trigger the rotation.
    let mut words = Vec::new();
    for row in 0..16 {
        let y_min = 380.0 - 15.0 * row as f32;
        for col in 0..3 {
            let x_max = 196.0 - 33.0 * col as f32;
            let text = format!("w{row}_{col}");
            words.push(word(&text, x_max - 30.0, x_max, y_min, y_min + 10.0));
        }
    }
    let page = reflow_words(1, 206.0, 400.0, words, &ReflowOptions::default()).unwrap();

    let text = page.text();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines[0], "w0_0 w0_1 w0_2");
    assert_eq!(lines[15], "w15_0 w15_1 w15_2");
}

#[test]
fn test_column_fragments_merge_without_capturing_neighbors() {
    // Two fragments of the left column separated by a gap large enough to
    // split them at block assembly, with a right column alongside. The
    // fragments merge back together; the columns stay separate until the
    // very end and never interleave.
    let mut words = Vec::new();
    // Left column, fragment 1.
    words.push(word("left1", 72.0, 150.0, 100.0, 112.0));
    // Left column, fragment 2: 30 points below, past one line height.
    words.push(word("left2", 72.0, 150.0, 142.0, 154.0));
    // Right column spanning the same vertical range.
    words.push(word("right1", 300.0, 380.0, 100.0, 112.0));
    words.push(word("right2", 300.0, 380.0, 142.0, 154.0));

    let page = page_of(words);
    let blocks = page.blocks().unwrap();
    assert_eq!(blocks.len(), 1);

    let mut texts = Vec::new();
    leaf_texts(&blocks[0], &mut texts);
    let left1 = texts.iter().position(|t| t == "left1").unwrap();
    let left2 = texts.iter().position(|t| t == "left2").unwrap();
    let right1 = texts.iter().position(|t| t == "right1").unwrap();
    let right2 = texts.iter().position(|t| t == "right2").unwrap();
    assert!(left1 < left2);
    assert!(right1 < right2);
}

#[test]
fn test_document_to_text_joins_pages() {
    let mut doc = Document::with_title("sample");
    for (number, text) in [(1, "one"), (2, "two")] {
        let mut page = Page::new(number, 595.0, 842.0);
        page.add_word(word(text, 72.0, 110.0, 100.0, 112.0)).unwrap();
        doc.add_page(page);
    }
    doc.reflow(&ReflowOptions::default()).unwrap();

    assert_eq!(doc.plain_text(), "one\n\ntwo\n\n");
    assert_eq!(to_text(&doc), "one\n\ntwo");
}

#[test]
fn test_block_tree_serializes() {
    let page = page_of(vec![
        word("serial", 72.0, 120.0, 100.0, 112.0),
        word("words", 124.0, 170.0, 100.0, 112.0),
    ]);
    let blocks = page.blocks().unwrap();

    let json = serde_json::to_string(&blocks[0]).unwrap();
    assert!(json.contains("\"type\":\"line\""));

    let restored: TextBlock = serde_json::from_str(&json).unwrap();
    assert_eq!(restored.text(), blocks[0].text());
}
