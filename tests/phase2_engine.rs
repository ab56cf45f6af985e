//! Phase 2 tests: Similarity engine + sense scorer + correlation.

mod common;

use resnik_wsd::engine::{evaluate_all, spearman, RunOptions, SenseScorer, SimilarityEngine};
use resnik_wsd::graph::TaxonomyBuilder;
use resnik_wsd::types::error::WsdError;
use resnik_wsd::types::{JudgmentRecord, SimilarityResult};

use common::bank_taxonomy;

// ==================== Helper ====================

fn judgment(line: usize, word1: &str, word2: &str, human_score: f64) -> JudgmentRecord {
    JudgmentRecord {
        line,
        word1: word1.to_string(),
        word2: word2.to_string(),
        human_score,
    }
}

// ==================== Pairwise Similarity Tests ====================

#[test]
fn test_similarity_is_symmetric() {
    let tax = bank_taxonomy();
    let engine = SimilarityEngine::new(&tax);
    for a in tax.synsets() {
        for b in tax.synsets() {
            let ab = engine.similarity(a.id, b.id);
            let ba = engine.similarity(b.id, a.id);
            assert_eq!(ab.score, ba.score, "{} vs {}", a.name, b.name);
        }
    }
}

#[test]
fn test_self_similarity_is_own_ic() {
    // IC grows with depth in this fixture, so a synset is its own best ancestor.
    let tax = bank_taxonomy();
    let engine = SimilarityEngine::new(&tax);
    for s in tax.synsets() {
        assert_eq!(engine.similarity(s.id, s.id).score, s.information_content);
    }
}

#[test]
fn test_disconnected_synsets_score_zero() {
    let tax = bank_taxonomy();
    let engine = SimilarityEngine::new(&tax);
    let gadget = tax.find("gadget.n.01").unwrap();
    let money = tax.find("money.n.01").unwrap();

    let result = engine.similarity(gadget, money);
    assert_eq!(result, SimilarityResult::disconnected());
    assert_eq!(result.score, 0.0);
    assert_eq!(result.ancestor, None);
}

#[test]
fn test_zero_ic_common_ancestor_differs_from_disconnected() {
    let tax = bank_taxonomy();
    let engine = SimilarityEngine::new(&tax);
    let river = tax.find("river.n.01").unwrap();
    let money = tax.find("money.n.01").unwrap();

    // Only entity.n.01 (IC 0) is shared.
    let result = engine.similarity(river, money);
    assert_eq!(result.score, 0.0);
    assert_eq!(result.ancestor, None);
    assert!(result.shares_ancestor);
    assert_ne!(result, SimilarityResult::disconnected());
}

#[test]
fn test_most_informative_ancestor_has_score_ic() {
    let tax = bank_taxonomy();
    let engine = SimilarityEngine::new(&tax);
    for a in tax.synsets() {
        for b in tax.synsets() {
            let result = engine.similarity(a.id, b.id);
            assert!(result.score >= 0.0);
            if let Some(ancestor) = result.ancestor {
                assert_eq!(tax.information_content(ancestor), result.score);
                assert!(tax.is_ancestor(ancestor, a.id));
                assert!(tax.is_ancestor(ancestor, b.id));
            }
        }
    }
}

#[test]
fn test_similarity_picks_highest_ic_common_ancestor() {
    let tax = bank_taxonomy();
    let engine = SimilarityEngine::new(&tax);
    let bank2 = tax.find("bank.n.02").unwrap();
    let money = tax.find("money.n.01").unwrap();

    let result = engine.similarity(bank2, money);
    assert_eq!(result.score, 5.5);
    assert_eq!(tax.name(result.ancestor.unwrap()), "finance.n.01");
}

#[test]
fn test_equal_ic_ancestors_keep_first_reached() {
    let mut b = TaxonomyBuilder::new();
    let p = b.add_synset_with_ic("p.n.01", &[], 3.0);
    let q = b.add_synset_with_ic("q.n.01", &[], 3.0);
    let x = b.add_synset_with_ic("x.n.01", &["x"], 9.0);
    let y = b.add_synset_with_ic("y.n.01", &["y"], 9.0);
    b.add_hypernym(x, p)
        .add_hypernym(x, q)
        .add_hypernym(y, q)
        .add_hypernym(y, p);
    let tax = b.build().unwrap();

    // Ancestors of the left synset are scanned in its hypernym order.
    let engine = SimilarityEngine::new(&tax);
    assert_eq!(engine.similarity(x, y).ancestor, Some(p));
    assert_eq!(engine.similarity(y, x).ancestor, Some(q));
}

// ==================== Pair Evaluation Tests ====================

#[test]
fn test_evaluate_pair_takes_max_over_senses() {
    let tax = bank_taxonomy();
    let engine = SimilarityEngine::new(&tax);
    assert_eq!(engine.evaluate_pair("bank", "money").unwrap(), 5.5);
    assert_eq!(engine.evaluate_pair("river", "slope").unwrap(), 2.0);
    assert_eq!(engine.evaluate_pair("gadget", "money").unwrap(), 0.0);
}

#[test]
fn test_evaluate_pair_with_itself_is_max_sense_ic() {
    let tax = bank_taxonomy();
    let engine = SimilarityEngine::new(&tax);
    for word in ["bank", "money", "slope", "gadget", "entity"] {
        let expected = tax
            .senses_of(word)
            .iter()
            .map(|&s| tax.information_content(s))
            .fold(0.0_f64, f64::max);
        assert_eq!(engine.evaluate_pair(word, word).unwrap(), expected, "{}", word);
    }
    assert_eq!(engine.evaluate_pair("bank", "bank").unwrap(), 8.0);
}

#[test]
fn test_evaluate_pair_unknown_word() {
    let tax = bank_taxonomy();
    let engine = SimilarityEngine::new(&tax);
    let err = engine.evaluate_pair("bank", "zyzzyva").unwrap_err();
    assert!(matches!(err, WsdError::NoSenseFound { word } if word == "zyzzyva"));
    let err = engine.evaluate_pair("zyzzyva", "bank").unwrap_err();
    assert!(matches!(err, WsdError::NoSenseFound { .. }));
}

#[test]
fn test_word_similarity_reports_ancestor() {
    let tax = bank_taxonomy();
    let result = SimilarityEngine::new(&tax)
        .word_similarity("river", "bank")
        .unwrap();
    assert_eq!(result.score, 2.0);
    assert_eq!(tax.name(result.ancestor.unwrap()), "object.n.01");
}

// ==================== Sense Scorer Tests ====================

#[test]
fn test_bank_with_river_and_money_prefers_financial_sense() {
    let tax = bank_taxonomy();
    let scorer = SenseScorer::new(&tax);
    let result = scorer.disambiguate("bank", &["river", "money"]).unwrap();

    assert_eq!(tax.name(result.preferred), "bank.n.02");
    assert_eq!(result.trace.len(), 2);
    assert_eq!(result.trace[0].context_word, "river");
    assert_eq!(result.trace[0].score, 2.0);
    assert_eq!(result.trace[1].context_word, "money");
    assert_eq!(result.trace[1].score, 5.5);

    let bank1 = tax.find("bank.n.01").unwrap();
    let bank2 = tax.find("bank.n.02").unwrap();
    let bank3 = tax.find("bank.n.03").unwrap();
    assert_eq!(result.score_of(bank1), Some(2.0));
    assert_eq!(result.score_of(bank2), Some(5.5));
    assert_eq!(result.score_of(bank3), Some(0.0));
}

#[test]
fn test_river_context_alone_prefers_riverbank() {
    let tax = bank_taxonomy();
    let scorer = SenseScorer::new(&tax);
    let result = scorer.disambiguate("bank", &["river"]).unwrap();
    assert_eq!(tax.name(result.preferred), "bank.n.01");

    // The trace score is the word-level similarity of probe and context.
    let pair = scorer.engine().word_similarity("bank", "river").unwrap();
    assert_eq!(result.trace[0].score, pair.score);
    assert_eq!(result.trace[0].ancestor, pair.ancestor);
}

#[test]
fn test_support_goes_to_every_sense_under_the_ancestor() {
    // Both senses of "crane" sit under the ancestor shared with "heron".
    let mut b = TaxonomyBuilder::new();
    let animal = b.add_synset_with_ic("animal.n.01", &[], 2.0);
    let bird = b.add_synset_with_ic("bird.n.01", &[], 4.0);
    let crane1 = b.add_synset_with_ic("crane.n.01", &["crane"], 6.0);
    let crane2 = b.add_synset_with_ic("crane.n.02", &["crane"], 6.0);
    let heron = b.add_synset_with_ic("heron.n.01", &["heron"], 6.0);
    b.add_hypernym(bird, animal)
        .add_hypernym(crane1, bird)
        .add_hypernym(crane2, bird)
        .add_hypernym(heron, bird);
    let tax = b.build().unwrap();

    let result = SenseScorer::new(&tax)
        .disambiguate("crane", &["heron"])
        .unwrap();
    assert_eq!(result.score_of(crane1), Some(4.0));
    assert_eq!(result.score_of(crane2), Some(4.0));
    assert_eq!(result.preferred, crane1);
}

#[test]
fn test_preferred_sense_is_a_candidate() {
    let tax = bank_taxonomy();
    let scorer = SenseScorer::new(&tax);
    let contexts: [&[&str]; 5] = [
        &["river", "money"],
        &["reserve"],
        &["slope", "incline", "river"],
        &["gadget"],
        &[],
    ];
    for context in contexts {
        let result = scorer.disambiguate("bank", context).unwrap();
        assert!(tax.senses_of("bank").contains(&result.preferred));
        assert_eq!(result.sense_scores.len(), 3);
    }
}

#[test]
fn test_all_unknown_context_returns_first_sense() {
    let tax = bank_taxonomy();
    let result = SenseScorer::new(&tax)
        .disambiguate("bank", &["zyzzyva", "quux"])
        .unwrap();

    assert_eq!(result.preferred, tax.senses_of("bank")[0]);
    assert!(result.sense_scores.iter().all(|&(_, s)| s == 0.0));
    assert_eq!(result.trace.len(), 2);
    assert!(result.trace.iter().all(|e| !e.known && e.score == 0.0));
}

#[test]
fn test_unknown_context_word_contributes_nothing() {
    let tax = bank_taxonomy();
    let scorer = SenseScorer::new(&tax);
    let with = scorer
        .disambiguate("bank", &["money", "zyzzyva"])
        .unwrap();
    let without = scorer.disambiguate("bank", &["money"]).unwrap();
    assert_eq!(with.sense_scores, without.sense_scores);
    assert_eq!(with.preferred, without.preferred);
}

#[test]
fn test_empty_context_returns_first_sense() {
    let tax = bank_taxonomy();
    let empty: [&str; 0] = [];
    let result = SenseScorer::new(&tax).disambiguate("bank", &empty).unwrap();
    assert_eq!(tax.name(result.preferred), "bank.n.01");
    assert!(result.trace.is_empty());
}

#[test]
fn test_unknown_probe_fails() {
    let tax = bank_taxonomy();
    let err = SenseScorer::new(&tax)
        .disambiguate("zyzzyva", &["money"])
        .unwrap_err();
    assert!(matches!(err, WsdError::NoSenseFound { word } if word == "zyzzyva"));
}

#[test]
fn test_adding_supporting_context_never_lowers_score() {
    let tax = bank_taxonomy();
    let scorer = SenseScorer::new(&tax);
    let bank2 = tax.find("bank.n.02").unwrap();

    let mut context: Vec<&str> = vec!["river"];
    let mut previous = scorer
        .disambiguate("bank", &context)
        .unwrap()
        .score_of(bank2)
        .unwrap();
    for extra in ["money", "finance", "slope", "money"] {
        context.push(extra);
        let current = scorer
            .disambiguate("bank", &context)
            .unwrap()
            .score_of(bank2)
            .unwrap();
        assert!(current >= previous, "adding {} lowered the score", extra);
        previous = current;
    }
    assert_eq!(previous, 16.5);
}

#[test]
fn test_tied_senses_prefer_earliest() {
    let tax = bank_taxonomy();
    // "abstraction" itself is the best match, and it sits above bank.n.02 and bank.n.03.
    let result = SenseScorer::new(&tax)
        .disambiguate("bank", &["abstraction"])
        .unwrap();
    let bank2 = tax.find("bank.n.02").unwrap();
    let bank3 = tax.find("bank.n.03").unwrap();
    assert_eq!(result.score_of(bank2), Some(0.8));
    assert_eq!(result.score_of(bank3), Some(0.8));
    assert_eq!(result.preferred, bank2);
}

// ==================== Correlation Tests ====================

#[test]
fn test_spearman_matching_rank_order() {
    let rho = spearman(&[3.2, 1.0, 0.0, 2.5], &[9.0, 2.0, 1.0, 7.0]).unwrap();
    assert!((rho - 1.0).abs() < 1e-12);
}

#[test]
fn test_spearman_with_ties() {
    let rho = spearman(&[5.5, 2.0, 0.0, 5.5], &[9.0, 2.0, 1.0, 7.0]).unwrap();
    let expected = 4.5 / 22.5_f64.sqrt();
    assert!((rho - expected).abs() < 1e-12);
}

#[test]
fn test_spearman_invalid_series() {
    assert!(matches!(
        spearman(&[1.0, 2.0], &[1.0]),
        Err(WsdError::InvalidSeries { .. })
    ));
    assert!(matches!(
        spearman(&[1.0], &[1.0]),
        Err(WsdError::InvalidSeries { .. })
    ));
    assert!(matches!(
        spearman(&[1.0, f64::NAN], &[1.0, 2.0]),
        Err(WsdError::InvalidSeries { .. })
    ));
}

#[test]
fn test_evaluate_all_correlates_against_human_scores() {
    let tax = bank_taxonomy();
    let judgments = vec![
        judgment(1, "bank", "money", 9.0),
        judgment(2, "river", "slope", 2.0),
        judgment(3, "gadget", "money", 1.0),
        judgment(4, "money", "finance", 7.0),
    ];
    let report = evaluate_all(&tax, &judgments, RunOptions::default()).unwrap();
    let scores: Vec<f64> = report.pairs.iter().map(|p| p.score).collect();
    assert_eq!(scores, vec![5.5, 2.0, 0.0, 5.5]);
    assert!((report.correlation - 4.5 / 22.5_f64.sqrt()).abs() < 1e-12);
}

#[test]
fn test_evaluate_all_unknown_word_policy() {
    let tax = bank_taxonomy();
    let judgments = vec![
        judgment(1, "bank", "money", 9.0),
        judgment(2, "zyzzyva", "money", 3.0),
        judgment(3, "river", "slope", 2.0),
    ];

    let err = evaluate_all(&tax, &judgments, RunOptions::default()).unwrap_err();
    assert!(matches!(err, WsdError::Record { line: 2, .. }));
    assert!(matches!(err.root(), WsdError::NoSenseFound { word } if word == "zyzzyva"));

    let lenient = RunOptions {
        skip_unknown_pairs: true,
    };
    let report = evaluate_all(&tax, &judgments, lenient).unwrap();
    assert_eq!(report.pairs[1].score, 0.0);
    assert_eq!(report.pairs.len(), 3);
}

#[test]
fn test_evaluate_all_single_pair_has_undefined_correlation() {
    let tax = bank_taxonomy();
    let report = evaluate_all(
        &tax,
        &[judgment(1, "bank", "money", 9.0)],
        RunOptions::default(),
    )
    .unwrap();
    assert!(report.correlation.is_nan());
}
