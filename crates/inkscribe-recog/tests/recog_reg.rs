//! Recognition regression test
//!
//!   Test 0: extract() + ExemplarClassifier -- learn glyphs, recognize
//!           shifted copies
//!   Test 1: NeuralNetwork::save() / load() -- exact weight round trip
//!   Test 2: NeuralNetwork::load_or_init() -- missing and corrupt weights
//!   Test 3: NeuralNetwork::train() -- learn three glyph classes

use inkscribe_core::GlyphMatrix;
use inkscribe_recog::{
    Classifier, ExemplarClassifier, FeatureOptions, NetworkOptions, NeuralNetwork, extract,
};
use inkscribe_test::{RegParams, glyph_from_rows, regout_path};

fn glyph(rows: &[&str]) -> GlyphMatrix {
    glyph_from_rows(rows).expect("glyph fixture")
}

fn letters() -> Vec<(String, GlyphMatrix)> {
    vec![
        ("o".to_string(), glyph(&["###", "#.#", "###"])),
        ("l".to_string(), glyph(&["#", "#", "#", "#"])),
        ("t".to_string(), glyph(&[".#.", "###", ".#.", ".##"])),
    ]
}

fn charset() -> Vec<String> {
    letters().into_iter().map(|(l, _)| l).collect()
}

/// Test 0: exemplar memory over extracted features
#[test]
fn test_0_exemplar_glyphs() {
    let mut rp = RegParams::new("recog_0_exemplar");

    let opts = FeatureOptions::default();
    let mut memory = ExemplarClassifier::new();
    let (labels, samples): (Vec<String>, Vec<Vec<f64>>) = letters()
        .into_iter()
        .map(|(l, g)| (l, extract(&g, &opts)))
        .unzip();
    memory.train(&samples, &labels, 1.0).expect("train");

    // same shape, different position inside a larger matrix
    let shifted = glyph(&["....", ".###", ".#.#", ".###", "...."]);
    rp.compare_strings(
        "o",
        memory.classify(&extract(&shifted, &opts)).as_deref().unwrap_or(""),
    );
    let unknown = glyph(&["##", ".#"]);
    rp.check(
        memory.classify(&extract(&unknown, &opts)).is_none(),
        "unlearned glyph is unknown",
    );

    assert!(rp.cleanup(), "recog_0 regression test failed");
}

/// Test 1: weights survive a save/load cycle exactly
#[test]
fn test_1_save_load() {
    let mut rp = RegParams::new("recog_1_save_load");

    let opts = NetworkOptions::default().with_hidden_size(6).with_seed(3);
    let net = NeuralNetwork::new(10, charset(), opts.clone()).expect("new network");
    let p1 = regout_path("recog_1_theta1.txt").expect("regout");
    let p2 = regout_path("recog_1_theta2.txt").expect("regout");
    net.save(&p1, &p2).expect("save");

    let loaded = NeuralNetwork::load(&p1, &p2, charset(), opts).expect("load");
    rp.check(loaded.sizes() == net.sizes(), "layer sizes restored");
    rp.check(loaded.params() == net.params(), "weights restored exactly");

    let wrong = NeuralNetwork::load(&p1, &p2, vec!["a".to_string()], NetworkOptions::default());
    rp.check(wrong.is_err(), "charset size must match output layer");

    assert!(rp.cleanup(), "recog_1 regression test failed");
}

/// Test 2: fallback to fresh weights
#[test]
fn test_2_load_or_init() {
    let mut rp = RegParams::new("recog_2_load_or_init");

    let opts = NetworkOptions::default().with_hidden_size(5).with_seed(9);
    let missing = regout_path("recog_2_missing.txt").expect("regout");
    let _ = std::fs::remove_file(&missing);
    let net = NeuralNetwork::load_or_init(&missing, &missing, 12, charset(), opts.clone())
        .expect("fresh network");
    rp.compare_values(12.0, net.sizes().input as f64, 0.0);
    rp.compare_values(5.0, net.sizes().hidden as f64, 0.0);
    rp.compare_values(3.0, net.sizes().output as f64, 0.0);

    let corrupt = regout_path("recog_2_corrupt.txt").expect("regout");
    std::fs::write(&corrupt, "0.1,0.2;0.3").expect("write");
    let net = NeuralNetwork::load_or_init(&corrupt, &corrupt, 12, charset(), opts.clone())
        .expect("fresh network");
    rp.compare_values(12.0, net.sizes().input as f64, 0.0);

    // stored weights for a different input size are replaced
    let p1 = regout_path("recog_2_theta1.txt").expect("regout");
    let p2 = regout_path("recog_2_theta2.txt").expect("regout");
    NeuralNetwork::new(4, charset(), opts.clone())
        .expect("new network")
        .save(&p1, &p2)
        .expect("save");
    let net = NeuralNetwork::load_or_init(&p1, &p2, 12, charset(), opts).expect("network");
    rp.compare_values(12.0, net.sizes().input as f64, 0.0);

    assert!(rp.cleanup(), "recog_2 regression test failed");
}

/// Test 3: network learns glyph classes
#[test]
fn test_3_train_network() {
    let mut rp = RegParams::new("recog_3_train");

    let fopts = FeatureOptions::default().with_grid(4, 4);
    let (labels, samples): (Vec<String>, Vec<Vec<f64>>) = letters()
        .into_iter()
        .map(|(l, g)| (l, extract(&g, &fopts)))
        .unzip();
    let opts = NetworkOptions::default()
        .with_hidden_size(8)
        .with_seed(11)
        .with_training(1000, 1.0);
    let mut net = NeuralNetwork::new(fopts.feature_len(), charset(), opts).expect("new network");
    net.train(&samples, &labels, 1.0).expect("train");

    for (label, sample) in labels.iter().zip(&samples) {
        rp.compare_strings(label, net.classify(sample).as_deref().unwrap_or(""));
    }

    assert!(rp.cleanup(), "recog_3 regression test failed");
}
