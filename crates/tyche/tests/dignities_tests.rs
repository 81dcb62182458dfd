use tyche::western::{DignitiesService, DignityRule, DignityTables, SignDignities, TermBound};
use tyche::zodiac::{Body, Sect, Sign};

fn tables_with(entry: SignDignities) -> DignityTables {
    DignityTables::traditional().with_sign(entry).unwrap()
}

#[test]
fn test_ruler_and_exaltation_both_apply() {
    // Mars rules and is exalted in a patched Aries; terms and faces avoid Mars
    let tables = tables_with(SignDignities {
        sign: Sign::Aries,
        ruler: Body::Mars,
        exaltation: Some(Body::Mars),
        detriment: Body::Venus,
        fall: Some(Body::Saturn),
        terms: [
            TermBound { until: 6.0, ruler: Body::Jupiter },
            TermBound { until: 12.0, ruler: Body::Venus },
            TermBound { until: 20.0, ruler: Body::Mercury },
            TermBound { until: 25.0, ruler: Body::Venus },
            TermBound { until: 30.0, ruler: Body::Saturn },
        ],
        faces: [Body::Sun, Body::Sun, Body::Venus],
    });
    let service = DignitiesService::new(&tables);

    // Fire triplicity by day is Sun, Jupiter, Saturn
    let score = service.score(Body::Mars, Sign::Aries, 22.0, Sect::Day);
    assert_eq!(score.score, 9);
    assert_eq!(score.rules, vec![DignityRule::Rulership, DignityRule::Exaltation]);
    assert!(!score.is_peregrine());
}

#[test]
fn test_plain_peregrine() {
    let tables = DignityTables::traditional();
    let service = DignitiesService::new(&tables);
    // Mercury at 3° Leo: no rulership, triplicity, term (Jupiter) or face (Saturn)
    let score = service.score(Body::Mercury, Sign::Leo, 3.0, Sect::Day);
    assert_eq!(score.score, -5);
    assert_eq!(score.rules, vec![DignityRule::Peregrine]);
    assert_eq!(score.trace(), "Peregrine(-5)");
}

#[test]
fn test_detriment_and_peregrine() {
    let tables = DignityTables::traditional();
    let service = DignitiesService::new(&tables);
    // Venus at 2° Aries by night: term Jupiter, face Mars
    let score = service.score(Body::Venus, Sign::Aries, 2.0, Sect::Night);
    assert_eq!(score.score, -10);
    assert_eq!(score.trace(), "Detriment(-5), Peregrine(-5)");
}

#[test]
fn test_fall_with_dignity_is_not_peregrine() {
    let tables = DignityTables::traditional();
    let service = DignitiesService::new(&tables);
    // Mars at 5° Cancer by day: water triplicity and own term, but in fall
    let score = service.score(Body::Mars, Sign::Cancer, 5.0, Sect::Day);
    assert_eq!(score.trace(), "Trip(+3), Term(+2), Fall(-4)");
    assert_eq!(score.score, 1);
}

#[test]
fn test_triplicity_follows_sect() {
    let tables = DignityTables::traditional();
    let service = DignitiesService::new(&tables);
    // Mercury in air: night triplicity lead, also a day member
    let day = service.score(Body::Mercury, Sign::Aquarius, 15.0, Sect::Day);
    let night = service.score(Body::Mercury, Sign::Aquarius, 15.0, Sect::Night);
    assert!(day.rules.contains(&DignityRule::Triplicity));
    assert!(night.rules.contains(&DignityRule::Triplicity));
    // Moon is in the water triplicity by day and night, never in air
    let moon = service.score(Body::Moon, Sign::Gemini, 1.0, Sect::Night);
    assert!(!moon.rules.contains(&DignityRule::Triplicity));
}

#[test]
fn test_rejects_broken_terms() {
    let mut entry = DignityTables::traditional().sign(Sign::Leo).clone();
    entry.terms[4].until = 29.0;
    assert!(DignityTables::traditional().with_sign(entry).is_err());
}
