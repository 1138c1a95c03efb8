use homescore::data::{load_suburbs, Property, PropertyType, Suburb, SuburbStore, UserPreferences};
use homescore::scoring::simple::{
    affordability_score, location_score, transport_score, PropertyProfile, CLASSIC, REFINED,
};
use homescore::scoring::{
    crime_rate_for_lga, property_score, suburb_score, ScoringEngine, Strategy, ALL_STRATEGIES,
    DEFAULT_CRIME_RATE,
};

fn hawthorn() -> Suburb {
    Suburb {
        name: "Hawthorn".to_string(),
        postcode: "3122".to_string(),
        lga: "Boroondara".to_string(),
        latitude: Some(-37.8221),
        longitude: Some(145.0389),
        median_price: 1_450_000.0,
        growth_1yr: 6.2,
        rental_yield: 3.1,
        irsd_score: 1085.0,
        ier_score: 1062.0,
        ieo_score: 1130.0,
        transit_score: 82.0,
        walk_score: 88.0,
        school_rating: 86.0,
        parks_density: 7.0,
        childcare_centers: 14.0,
        shopping_centers: 6.0,
        cafes_restaurants: 85.0,
        commute_minutes: 18.0,
        category: "INNER METRO".to_string(),
        ..Suburb::default()
    }
}

fn listing() -> Property {
    Property {
        address: "12 High St".to_string(),
        suburb: "Hawthorn".to_string(),
        price: Some(950_000.0),
        property_type: PropertyType::House,
        land_size: Some(480.0),
        bedrooms: Some(3.0),
        bathrooms: Some(2.0),
        street_quality: Some(4.0),
        ..Property::default()
    }
}

#[test]
fn suburb_scores_are_deterministic() {
    for strategy in ALL_STRATEGIES {
        let first = suburb_score(&hawthorn(), strategy);
        let second = suburb_score(&hawthorn(), strategy);
        assert_eq!(first, second);
    }
}

#[test]
fn suburb_tiers_are_non_negative_and_bounded() {
    for strategy in ALL_STRATEGIES {
        let score = suburb_score(&hawthorn(), strategy);
        for tier in [
            score.investment,
            score.location,
            score.accessibility,
            score.lifestyle,
        ] {
            assert!(tier >= 0.0);
        }
        assert!(score.composite <= 100.0);
    }
}

#[test]
fn property_composite_never_exceeds_one_hundred() {
    let sprawling = Property {
        land_size: Some(80_000.0),
        bedrooms: Some(14.0),
        bathrooms: Some(10.0),
        street_quality: Some(5.0),
        ..listing()
    };
    let score = property_score(&sprawling, &hawthorn(), None);
    assert_eq!(score.composite, 100.0);
}

#[test]
fn empty_suburb_still_scores_without_panicking() {
    let score = suburb_score(&Suburb::default(), Strategy::Balanced);
    assert!(score.composite.is_finite());
    assert!(!score.composite.is_nan());
    for value in score.breakdown.values() {
        assert!(value.is_finite());
    }
}

#[test]
fn unknown_lga_falls_back_to_the_default_crime_rate() {
    assert_eq!(crime_rate_for_lga("Boroondara"), DEFAULT_CRIME_RATE);
    assert_eq!(crime_rate_for_lga("Nillumbik"), 3245.67);
}

#[test]
fn budget_window_owns_its_boundaries() {
    let prefs = UserPreferences {
        budget_min: Some(500_000.0),
        budget_max: Some(750_000.0),
        ..UserPreferences::default()
    };
    assert_eq!(
        Strategy::from_property_price(575_000.0, Some(&prefs)),
        Strategy::Investment
    );
    assert_eq!(
        Strategy::from_property_price(600_000.0, Some(&prefs)),
        Strategy::Balanced
    );
    assert_eq!(
        Strategy::from_property_price(650_000.0, Some(&prefs)),
        Strategy::Lifestyle
    );
}

#[test]
fn every_weight_table_sums_to_one() {
    for strategy in ALL_STRATEGIES {
        assert!((strategy.suburb_tiers().total() - 1.0).abs() < 1e-9);
        assert!((strategy.property_tiers().total() - 1.0).abs() < 1e-9);
        let location = strategy.location_weights();
        let total = location.irsd + location.ier + location.ieo + location.crime;
        assert!((total - 1.0).abs() < 1e-9);
    }
}

#[test]
fn starter_profile_hits_its_ladder_steps() {
    assert_eq!(location_score(12.0), 7.5);
    assert_eq!(transport_score(600.0), 9.0);
    assert_eq!(affordability_score(650_000.0), 10.0);
    assert_eq!(PropertyProfile::STARTER.composite(), 82.9);
}

#[test]
fn hawthorn_flat_weight_composites_match_published_values() {
    let factors = homescore::scoring::simple::FactorScores {
        location: 9.5,
        schools: 9.8,
        safety: 9.2,
        amenities: 9.0,
        transport: 8.8,
        lifestyle: 9.3,
        growth: 7.5,
    };
    assert_eq!(factors.composite(&CLASSIC), 92.3);
    assert_eq!(factors.composite(&REFINED), 91.7);
}

#[test]
fn csv_store_score_flow_end_to_end() {
    let csv = "suburb,postcode,lga,latitude,longitude,medianPrice,growth1yr,rentalYield,\
               irsd_score,ier_score,ieo_score,transitScore,walkScore,schoolRating,parksDensity,\
               childcareCenters,shoppingCenters,cafesRestaurants,primaryCommuteMinutes,category\n\
               Hawthorn,3122,Boroondara,-37.8221,145.0389,1450000,6.2,3.1,1085,1062,1130,82,88,\
               86,7,14,6,85,18,INNER METRO\n\
               Werribee,3030,Wyndham,-37.8996,144.6596,650000,8.4,4.2,985,992,978,55,60,68,4,8,\
               3,25,42,OUTER GROWTH\n";
    let suburbs = load_suburbs(csv.as_bytes()).expect("reference csv parses");
    let store = SuburbStore::new(suburbs);
    assert_eq!(store.len(), 2);

    let engine = ScoringEngine::new();
    let suburb = engine
        .score_suburb_in(&store, "hawthorn", Some(Strategy::Balanced), None)
        .expect("known suburb scores");
    assert!(suburb.composite > 0.0 && suburb.composite <= 100.0);

    let property = engine
        .score_property_in(&store, &listing(), None)
        .expect("listing matches its suburb");
    assert_eq!(property.suburb, "Hawthorn");
    assert!(property.composite > 0.0 && property.composite <= 100.0);

    // Wyndham is in the crime table; the investment strategy should favor
    // the higher-yield growth corridor on the investment tier.
    let outer = engine
        .score_suburb_in(&store, "Werribee", Some(Strategy::Investment), None)
        .expect("known suburb scores");
    let inner = engine
        .score_suburb_in(&store, "Hawthorn", Some(Strategy::Investment), None)
        .expect("known suburb scores");
    assert!(outer.investment > inner.investment);
}

#[test]
fn strategy_changes_the_composite() {
    let investment = suburb_score(&hawthorn(), Strategy::Investment);
    let lifestyle = suburb_score(&hawthorn(), Strategy::Lifestyle);
    assert_ne!(investment.composite, lifestyle.composite);
}
