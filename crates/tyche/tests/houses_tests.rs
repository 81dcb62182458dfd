use tyche::houses::{rank_houses, Rank};
use tyche::western::{DignitiesService, DignityTables};
use tyche::zodiac::{Body, Sect, Sign};

#[test]
fn test_rank_thresholds_are_inclusive() {
    assert_eq!(Rank::from_score(9), Rank::S);
    assert_eq!(Rank::from_score(7), Rank::S);
    assert_eq!(Rank::from_score(4), Rank::A);
    assert_eq!(Rank::from_score(3), Rank::B);
    assert_eq!(Rank::from_score(0), Rank::B);
    assert_eq!(Rank::from_score(-1), Rank::C);
    assert_eq!(Rank::from_score(-4), Rank::C);
    assert_eq!(Rank::from_score(-5), Rank::D);
    assert_eq!(Rank::from_score(-10), Rank::D);
}

#[test]
fn test_house_rank_uses_ruler_score() {
    let tables = DignityTables::traditional();
    let service = DignitiesService::new(&tables);
    let scores = vec![
        // Sun in Leo by day: ruler and triplicity
        service.score(Body::Sun, Sign::Leo, 15.0, Sect::Day),
        // Venus in Aries: detriment, peregrine
        service.score(Body::Venus, Sign::Aries, 2.0, Sect::Day),
    ];
    let houses = rank_houses(Sign::Leo, &scores, &tables);

    assert_eq!(houses[0].ruler, Body::Sun);
    assert_eq!(houses[0].rank, Rank::S);
    // Libra and Taurus are Venus houses with Leo rising
    assert_eq!(houses[2].sign, Sign::Libra);
    assert_eq!(houses[2].rank, Rank::D);
    assert_eq!(houses[9].sign, Sign::Taurus);
    assert_eq!(houses[9].ruler_score, -10);
    // Mercury was not scored
    assert_eq!(houses[1].ruler, Body::Mercury);
    assert_eq!(houses[1].ruler_score, 0);
    assert_eq!(houses[1].rank, Rank::B);
}

#[test]
fn test_houses_numbered_in_order() {
    let tables = DignityTables::traditional();
    let houses = rank_houses(Sign::Pisces, &[], &tables);
    let numbers: Vec<u8> = houses.iter().map(|h| h.house).collect();
    assert_eq!(numbers, (1..=12).collect::<Vec<u8>>());
    assert_eq!(houses[1].sign, Sign::Aries);
    assert_eq!(houses[11].theme, "秘密・障害");
}
