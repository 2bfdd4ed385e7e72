mod common;

use borderroute_lib::{find_route, Error};

use common::{central_europe, codes};

#[test]
fn neighbouring_countries_route_directly() {
    let graph = central_europe();
    let route = find_route(&graph, "CZE", "AUT").expect("route exists");
    assert_eq!(codes(&route), vec!["CZE", "AUT"]);
    assert_eq!(route.hop_count(), 1);
}

#[test]
fn two_hop_route_passes_through_austria() {
    let graph = central_europe();
    let route = find_route(&graph, "CZE", "ITA").expect("route exists");
    assert_eq!(codes(&route), vec!["CZE", "AUT", "ITA"]);
}

#[test]
fn three_hop_route_to_romania() {
    let graph = central_europe();
    let route = find_route(&graph, "CZE", "ROU").expect("route exists");
    assert_eq!(codes(&route), vec!["CZE", "AUT", "HUN", "ROU"]);
    assert_eq!(route.codes().len(), 4);
}

#[test]
fn same_origin_and_destination_is_single_country() {
    let graph = central_europe();
    let route = find_route(&graph, "CZE", "CZE").expect("route exists");
    assert_eq!(codes(&route), vec!["CZE"]);
    assert_eq!(route.hop_count(), 0);
}

#[test]
fn isolated_country_routes_to_itself() {
    let graph = central_europe();
    let route = find_route(&graph, "isl", "ISL").expect("route exists");
    assert_eq!(codes(&route), vec!["ISL"]);
}

#[test]
fn unknown_origin_is_reported() {
    let graph = central_europe();
    let error = find_route(&graph, "XXX", "ITA").expect_err("unknown origin");
    assert!(matches!(error, Error::CountryNotFound { ref code } if code == "XXX"));
}

#[test]
fn unknown_destination_is_reported() {
    let graph = central_europe();
    let error = find_route(&graph, "CZE", "ZZZ").expect_err("unknown destination");
    assert!(matches!(error, Error::CountryNotFound { ref code } if code == "ZZZ"));
}

#[test]
fn origin_is_checked_before_destination() {
    let graph = central_europe();
    let error = find_route(&graph, "XXX", "ZZZ").expect_err("both unknown");
    assert!(matches!(error, Error::CountryNotFound { ref code } if code == "XXX"));
}

#[test]
fn unknown_destination_fails_even_for_isolated_origin() {
    let graph = central_europe();
    let error = find_route(&graph, "ISL", "ZZZ").expect_err("unknown destination");
    assert!(matches!(error, Error::CountryNotFound { ref code } if code == "ZZZ"));
}

#[test]
fn island_destination_has_no_land_route() {
    let graph = central_europe();
    let error = find_route(&graph, "CZE", "ISL").expect_err("no land route");
    match error {
        Error::RouteNotFound {
            origin,
            destination,
        } => {
            assert_eq!(origin, "CZE");
            assert_eq!(destination, "ISL");
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn island_origin_has_no_land_route() {
    let graph = central_europe();
    let error = find_route(&graph, "ISL", "CZE").expect_err("no land route");
    let message = error.to_string();
    assert!(message.contains("ISL"));
    assert!(message.contains("CZE"));
    assert!(matches!(error, Error::RouteNotFound { .. }));
}

#[test]
fn lowercase_input_is_normalized() {
    let graph = central_europe();
    let route = find_route(&graph, "cze", " Ita ").expect("route exists");
    assert_eq!(codes(&route), vec!["CZE", "AUT", "ITA"]);
}

#[test]
fn unknown_code_is_reported_normalized() {
    let graph = central_europe();
    let error = find_route(&graph, "xxx", "ITA").expect_err("unknown origin");
    assert_eq!(error.to_string(), "country not found: 'XXX'");
}

#[test]
fn ties_break_in_code_order() {
    // CZE -> SVN has two 3-hop routes: via HUN and via ITA.
    let graph = central_europe();
    let route = find_route(&graph, "CZE", "SVN").expect("route exists");
    assert_eq!(codes(&route), vec!["CZE", "AUT", "HUN", "SVN"]);
}

#[test]
fn shortest_route_skips_longer_alternatives() {
    let graph = central_europe();
    let route = find_route(&graph, "ITA", "HUN").expect("route exists");
    assert_eq!(route.hop_count(), 2);
    assert_eq!(route.origin().map(|c| c.as_str()), Some("ITA"));
    assert_eq!(route.destination().map(|c| c.as_str()), Some("HUN"));
}
