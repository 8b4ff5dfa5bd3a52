//! Integration tests for the suggestion classifier

use rust_decimal_macros::dec;
use shelf_pricer::config::ModelConfig;
use shelf_pricer::model::{
    training_set, Features, Suggestion, SuggestionForest, SuggestionModel,
};
use shelf_pricer::pricing::DemandLevel;

#[test]
fn test_forest_recovers_its_training_table() {
    let forest = SuggestionForest::fit(&ModelConfig::default());
    for row in training_set() {
        let prediction = forest.predict(&row.features);
        assert_eq!(prediction.suggestion, row.label);
    }
}

#[test]
fn test_two_fits_agree_exactly() {
    let config = ModelConfig::default();
    let a = SuggestionForest::fit(&config);
    let b = SuggestionForest::fit(&config);

    let probe = Features::from_observation(dec!(42), 18, DemandLevel::Medium, 4);
    let pa = a.predict(&probe);
    let pb = b.predict(&probe);
    assert_eq!(pa.suggestion, pb.suggestion);
    assert_eq!(pa.confidence, pb.confidence);
}

#[test]
fn test_prediction_is_always_a_known_label() {
    let forest = SuggestionForest::fit(&ModelConfig::default());
    let probes = [
        Features::from_observation(dec!(1), 0, DemandLevel::Low, -10),
        Features::from_observation(dec!(999), 1000, DemandLevel::High, 365),
        Features::from_observation(dec!(55), 20, DemandLevel::Medium, 2),
    ];
    for probe in probes {
        let prediction = forest.predict(&probe);
        assert!(matches!(
            prediction.suggestion,
            Suggestion::PutEven | Suggestion::PutLow | Suggestion::DontPut
        ));
        assert!(prediction.confidence > 0.0 && prediction.confidence <= 1.0);
    }
}

#[test]
fn test_small_forest_still_classifies() {
    let config = ModelConfig {
        trees: 10,
        ..ModelConfig::default()
    };
    let forest = SuggestionForest::fit(&config);
    assert_eq!(forest.len(), 10);

    let probe = Features::from_observation(dec!(30), 5, DemandLevel::Low, 0);
    let prediction = forest.predict(&probe);
    // An exact training point with two near-identical labeled neighbors
    assert_eq!(prediction.suggestion, Suggestion::DontPut);
}

#[test]
fn test_shared_between_threads() {
    let forest = SuggestionForest::fit(&ModelConfig::default());
    let probe = Features::from_observation(dec!(50), 10, DemandLevel::High, 5);
    let expected = forest.predict(&probe).suggestion;

    // Read-only after fit: concurrent callers need no synchronization
    std::thread::scope(|scope| {
        for _ in 0..4 {
            scope.spawn(|| {
                assert_eq!(forest.predict(&probe).suggestion, expected);
            });
        }
    });
}
