//! Dictionary regression test
//!
//!   Test 0: from_corpus_dir() -- corpus of three files plus a subdirectory
//!   Test 1: save() / load() -- persistence round trip
//!   Test 2: correct_word() -- correction stages on a corpus-built dictionary

use std::fs;

use inkscribe_dict::{DictError, Dictionary};
use inkscribe_test::{RegParams, regout_path};

fn write_corpus(name: &str) -> String {
    let dir = regout_path(name).expect("regout");
    let _ = fs::remove_dir_all(&dir);
    fs::create_dir_all(format!("{dir}/nested")).expect("create corpus");
    fs::write(
        format!("{dir}/a.txt"),
        "The quick brown fox.\nThe lazy dog, the end!",
    )
    .expect("write corpus");
    fs::write(format!("{dir}/b.txt"), "quick QUICK (fox)").expect("write corpus");
    // "Öl über" in Latin-1
    fs::write(format!("{dir}/c.txt"), [0xd6, b'l', b' ', 0xfc, b'b', b'e', b'r'])
        .expect("write corpus");
    fs::write(format!("{dir}/nested/c.txt"), "ignored words").expect("write corpus");
    dir
}

/// Test 0: corpus ingestion
#[test]
fn test_0_corpus() {
    let mut rp = RegParams::new("dict_0_corpus");

    let dir = write_corpus("dict_0_corpus");
    let dict = Dictionary::from_corpus_dir(&dir).expect("build dictionary");
    rp.compare_values(3.0, dict.frequency("the").unwrap_or(0) as f64, 0.0);
    rp.compare_values(3.0, dict.frequency("quick").unwrap_or(0) as f64, 0.0);
    rp.compare_values(2.0, dict.frequency("fox").unwrap_or(0) as f64, 0.0);
    rp.compare_values(1.0, dict.frequency("end").unwrap_or(0) as f64, 0.0);
    rp.check(!dict.contains("ignored"), "subdirectories are skipped");
    rp.compare_values(1.0, dict.frequency("öl").unwrap_or(0) as f64, 0.0);
    rp.check(dict.contains("über"), "Latin-1 file is decoded");
    rp.compare_values(9.0, dict.len() as f64, 0.0);

    let missing = Dictionary::from_corpus_dir(format!("{dir}/a.txt"));
    rp.check(
        matches!(missing, Err(DictError::NotADirectory(_))),
        "file path is rejected",
    );

    assert!(rp.cleanup(), "dict_0 regression test failed");
}

/// Test 1: persistence
#[test]
fn test_1_save_load() {
    let mut rp = RegParams::new("dict_1_save_load");

    let dir = write_corpus("dict_1_corpus");
    let dict = Dictionary::from_corpus_dir(&dir).expect("build dictionary");
    let path = regout_path("dict_1.txt").expect("regout");
    dict.save(&path).expect("save");

    let loaded = Dictionary::load(&path).expect("load");
    rp.check(loaded == dict, "dictionary restored");
    let text = fs::read_to_string(&path).expect("read back");
    rp.compare_strings(&dict.to_serialized(), &text);
    rp.check(
        Dictionary::load(format!("{dir}/missing.txt")).is_err(),
        "missing file is an error",
    );

    assert!(rp.cleanup(), "dict_1 regression test failed");
}

/// Test 2: correcting recognizer output
#[test]
fn test_2_correct() {
    let mut rp = RegParams::new("dict_2_correct");

    let dir = write_corpus("dict_2_corpus");
    let mut dict = Dictionary::from_corpus_dir(&dir).expect("build dictionary");

    rp.compare_strings("The", &dict.correct_word("The"));
    rp.compare_values(4.0, dict.frequency("the").unwrap_or(0) as f64, 0.0);
    rp.compare_strings("quick", &dict.correct_word("q?ick"));
    rp.compare_strings("Brown,", &dict.correct_word("Brovn,"));
    rp.compare_strings("lazy", &dict.correct_word("1azv"));
    rp.compare_strings("xylophone", &dict.correct_word("xylophone"));

    assert!(rp.cleanup(), "dict_2 regression test failed");
}
