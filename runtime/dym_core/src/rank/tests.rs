use super::{default_threshold, nearest_tier, rank, rank_filtered};
use pretty_assertions::assert_eq;

#[test]
fn single_nearest_match() {
    let candidates = ["Dumper", "helper", "printer"];
    assert_eq!(rank("Dumpr", &candidates), vec!["Dumper"]);
}

#[test]
fn empty_candidates_give_empty_list() {
    let candidates: [&str; 0] = [];
    assert!(rank("anything", &candidates).is_empty());
}

#[test]
fn non_empty_candidates_never_give_empty_list() {
    // Even a distant nearest tier is returned; thresholds are the
    // caller's policy, not the ranker's.
    let candidates = ["completely_unrelated"];
    assert_eq!(rank("x", &candidates), vec!["completely_unrelated"]);
}

#[test]
fn failed_name_is_never_suggested() {
    let candidates = ["prnt", "print"];
    assert_eq!(rank("prnt", &candidates), vec!["print"]);
}

#[test]
fn only_failed_name_in_candidates_gives_empty_list() {
    let candidates = ["prnt"];
    assert!(rank("prnt", &candidates).is_empty());
}

#[test]
fn ties_preserve_candidate_order() {
    // Both at distance 1 from "Dumpr"; collector order is kept, no
    // alphabetical re-sort.
    let candidates = ["Dumber", "Dumper"];
    assert_eq!(rank("Dumpr", &candidates), vec!["Dumber", "Dumper"]);

    let reversed = ["Dumper", "Dumber"];
    assert_eq!(rank("Dumpr", &reversed), vec!["Dumper", "Dumber"]);
}

#[test]
fn only_minimum_tier_is_surfaced() {
    // "find" and "fund" sit at distance 1, "fold" at 2; the farther
    // candidate never rides along.
    let candidates = ["find", "fold", "fund"];
    assert_eq!(rank("fnd", &candidates), vec!["find", "fund"]);
}

#[test]
fn excluded_sentinels_are_dropped() {
    let candidates = ["AUTOLOAD", "autoload_all"];
    let tier = rank_filtered("AUTOLOAd", &candidates, &["AUTOLOAD"]);
    assert_eq!(tier, vec!["autoload_all"]);
}

#[test]
fn all_excluded_gives_none() {
    let candidates = ["AUTOLOAD"];
    assert!(nearest_tier("AUTOLOAd", &candidates, &["AUTOLOAD"]).is_none());
}

#[test]
fn nearest_tier_reports_distance() {
    let candidates = ["Dumper", "Dumber"];
    let (distance, tier) = match nearest_tier("Dumpr", &candidates, &[]) {
        Some(found) => found,
        None => panic!("tier expected"),
    };
    assert_eq!(distance, 1);
    assert_eq!(tier, vec!["Dumper", "Dumber"]);
}

#[test]
fn ranking_is_deterministic() {
    let candidates = ["fold", "find", "filter", "map"];
    let first = rank("fnd", &candidates);
    let second = rank("fnd", &candidates);
    assert_eq!(first, second);
}

#[test]
fn threshold_scales_with_length() {
    assert_eq!(default_threshold(0), 0);
    assert_eq!(default_threshold(1), 1);
    assert_eq!(default_threshold(2), 1);
    assert_eq!(default_threshold(3), 2);
    assert_eq!(default_threshold(5), 2);
    assert_eq!(default_threshold(6), 3);
    assert_eq!(default_threshold(10), 3);
    assert_eq!(default_threshold(14), 5);
    assert_eq!(default_threshold(40), 5);
}
