mod common;

use common::TestEnv;
use predicates::str::contains;
use serde_json::Value;

fn keys(listing: &Value) -> Vec<String> {
    listing["data"]
        .as_array()
        .expect("listing array")
        .iter()
        .map(|i| i["key"].as_str().expect("key").to_string())
        .collect()
}

#[test]
fn browse_then_checkout_then_order() {
    let env = TestEnv::new();

    let listing = env.run_json(&["browse"]);
    assert_eq!(listing["ok"], true);
    assert_eq!(keys(&listing), vec!["gle53", "bmwM4", "rangeRover"]);
    let detail_url = listing["data"][0]["detail_url"]
        .as_str()
        .expect("detail url")
        .to_string();
    assert_eq!(detail_url, "/product?car=gle53");

    let detail = env.run_json(&[
        "product",
        &detail_url,
        "--click",
        "2",
        "--validator",
        "validator1",
        "--validator",
        "validator3",
        "--checkout",
    ]);
    let page = &detail["data"];
    assert_eq!(page["status"], "found");
    assert_eq!(page["price"], "$75,000");
    assert_eq!(page["gallery"]["selected"], 2);
    assert_eq!(page["gallery"]["preview"], "/images/products/gle3.jpg");
    assert_eq!(page["gallery"]["thumbnails"][2]["active"], true);
    assert_eq!(page["gallery"]["thumbnails"][0]["active"], false);
    assert_eq!(page["selected_validator"], "validator3");

    let selected: Vec<&str> = page["validators"]
        .as_array()
        .expect("validators")
        .iter()
        .filter(|v| v["selected"] == true)
        .map(|v| v["id"].as_str().expect("id"))
        .collect();
    assert_eq!(selected, vec!["validator3"]);

    assert_eq!(page["checkout"]["outcome"], "navigate");
    assert_eq!(page["checkout"]["target"]["page"], "order");
    let order_url = page["checkout"]["target"]["url"]
        .as_str()
        .expect("order url")
        .to_string();
    assert_eq!(order_url, "/order?carKey=gle53&validatorId=validator3");

    let order = env.run_json(&["order", &order_url]);
    let view = &order["data"];
    assert_eq!(view["status"], "found");
    assert_eq!(view["car"]["name"], "Mercedes GLE53");
    assert_eq!(view["car"]["image"], "/images/products/gle1.jpg");
    assert_eq!(view["validator"]["name"], "Validator 3");
    assert_eq!(view["validator"]["success_rate"], "96.9%");
    assert_eq!(view["total"], "$75,000");
}

#[test]
fn checkout_without_selection_is_rejected_on_the_page() {
    let env = TestEnv::new();
    let detail = env.run_json(&["product", "car=bmwM4", "--checkout"]);
    let checkout = &detail["data"]["checkout"];
    assert_eq!(checkout["outcome"], "rejected");
    assert_eq!(checkout["error"], "missing_selection");
    assert_eq!(
        checkout["message"],
        "Please select a validator before checkout"
    );

    env.cmd()
        .args(["product", "car=bmwM4", "--checkout"])
        .assert()
        .success()
        .stdout(contains(
            "alert: Please select a validator before checkout",
        ));
}

#[test]
fn checkout_on_missing_car_reports_the_right_refusal() {
    let env = TestEnv::new();

    let unselected = env.run_json(&["product", "car=lambo", "--checkout", "--click", "9"]);
    assert_eq!(unselected["data"]["status"], "not_found");
    assert_eq!(unselected["data"]["message"], "Car not found");
    assert_eq!(unselected["data"]["checkout"]["error"], "missing_selection");

    let selected = env.run_json(&[
        "product",
        "car=lambo",
        "--validator",
        "validator2",
        "--checkout",
    ]);
    assert_eq!(selected["data"]["checkout"]["error"], "vehicle_not_loaded");
    assert_eq!(
        selected["data"]["checkout"]["message"],
        "Car details not loaded yet. Please try again."
    );
}

#[test]
fn detail_without_car_param_is_not_found() {
    let env = TestEnv::new();
    let detail = env.run_json(&["product", "/product"]);
    assert_eq!(detail["data"]["status"], "not_found");
    assert!(detail["data"].get("checkout").is_none());
}

#[test]
fn order_needs_both_car_and_validator() {
    let env = TestEnv::new();
    for query in [
        "carKey=gle53",
        "validatorId=validator1",
        "carKey=lambo&validatorId=validator1",
        "carKey=gle53&validatorId=validator99",
        "",
    ] {
        let order = env.run_json(&["order", query]);
        assert_eq!(order["data"]["status"], "not_found", "query {:?}", query);
        assert_eq!(order["data"]["message"], "Order data not found");
    }
}

#[test]
fn legacy_checkout_round_trips_through_summary() {
    let env = TestEnv::new();
    let detail = env.run_json(&[
        "product",
        "car=rangeRover",
        "--validator",
        "validator5",
        "--checkout",
        "--legacy",
    ]);
    let target = &detail["data"]["checkout"]["target"];
    assert_eq!(target["page"], "order_summary");
    assert_eq!(target["params"]["car_name"], "Range Rover");
    let url = target["url"].as_str().expect("summary url").to_string();
    assert!(url.starts_with("order-summary.html?"));

    let summary = env.run_json(&["summary", &url]);
    let view = &summary["data"];
    assert_eq!(view["car_name"], "Range Rover");
    assert_eq!(view["car_price"], "$32,000");
    assert_eq!(view["car_image"], "/images/products/range1.jpg");
    assert_eq!(view["validator"]["name"], "Validator 5");
    assert_eq!(view["validator"]["image"], "/images/validators/validator5.png");
}

#[test]
fn summary_keeps_question_marks_in_bare_values() {
    let env = TestEnv::new();
    let summary = env.run_json(&["summary", "carName=Who?&carPrice=%2410"]);
    assert_eq!(summary["data"]["car_name"], "Who?");
    assert_eq!(summary["data"]["car_price"], "$10");

    let detail = env.run_json(&["product", "car=gle53?"]);
    assert_eq!(detail["data"]["status"], "not_found");
}

#[test]
fn summary_skips_absent_and_empty_fields() {
    let env = TestEnv::new();
    let summary = env.run_json(&["summary", "carName=BMW%20M4&carPrice=&validator=nobody"]);
    let view = &summary["data"];
    assert_eq!(view["car_name"], "BMW M4");
    assert!(view["car_price"].is_null());
    assert!(view["car_image"].is_null());
    assert!(view["validator"].is_null());

    env.cmd()
        .args(["summary", "carName=BMW%20M4"])
        .assert()
        .success()
        .stdout(contains("car: BMW M4"));
}

#[test]
fn browse_filters_by_make_and_price() {
    let env = TestEnv::new();
    assert_eq!(keys(&env.run_json(&["browse", "--make", "bmw"])), vec!["bmwM4"]);
    assert_eq!(
        keys(&env.run_json(&["browse", "--price-range", "over-50k"])),
        vec!["gle53"]
    );
    assert_eq!(
        keys(&env.run_json(&["browse", "rover"])),
        vec!["rangeRover"]
    );
    assert!(keys(&env.run_json(&["browse", "--price-range", "under-20k"])).is_empty());
    assert_eq!(
        keys(&env.run_json(&["browse", "--make", "mercedes", "--model", "GLE"])),
        vec!["gle53"]
    );
    assert!(keys(&env.run_json(&["browse", "--model", "camry"])).is_empty());
}

#[test]
fn static_edition_from_config_file() {
    let env = TestEnv::new();
    env.write_config("edition = \"static\"\n");

    let listing = env.run_json(&["browse"]);
    assert_eq!(
        keys(&listing),
        vec!["gle53", "bmwM4", "rangeRover", "landCruiser"]
    );
    assert_eq!(listing["data"][0]["price"], "$97,855");
    assert_eq!(listing["data"][3]["card_image"], "images/products/cruiser1.jpg");

    let order = env.run_json(&["order", "carKey=landCruiser&validatorId=validator7"]);
    assert_eq!(order["data"]["total"], "$ 69,390");
    assert_eq!(
        order["data"]["validator"]["image"],
        "images/validators/validator7.png"
    );

    let overridden = env.run_json(&["--edition", "app", "browse"]);
    assert_eq!(overridden["data"][0]["price"], "$75,000");

    let config = env.run_json(&["config"]);
    assert_eq!(config["data"]["config_file_present"], true);
    assert_eq!(config["data"]["edition"], "static");
}

#[test]
fn configured_routes_shape_navigation_urls() {
    let env = TestEnv::new();
    env.write_config(
        r#"
[routes]
product = "/cars/detail"
order = "/checkout/order"
"#,
    );

    let listing = env.run_json(&["browse", "--make", "bmw"]);
    assert_eq!(listing["data"][0]["detail_url"], "/cars/detail?car=bmwM4");

    let detail = env.run_json(&[
        "product",
        "car=bmwM4",
        "--validator",
        "validator4",
        "--checkout",
    ]);
    assert_eq!(
        detail["data"]["checkout"]["target"]["url"],
        "/checkout/order?carKey=bmwM4&validatorId=validator4"
    );
}

#[test]
fn invalid_config_file_fails() {
    let env = TestEnv::new();
    env.write_config("edition = \"deluxe\"\n");
    env.cmd()
        .arg("browse")
        .assert()
        .failure()
        .stderr(contains("invalid config"));
}

#[test]
fn catalog_file_replaces_builtin_data() {
    let env = TestEnv::new();

    let listing = env.run_json_fixture(&["browse"]);
    assert_eq!(keys(&listing), vec!["civic"]);
    assert_eq!(listing["data"][0]["card_image"], "lot/civic1.jpg");

    let detail = env.run_json_fixture(&[
        "product",
        "car=civic",
        "--click",
        "1",
        "--validator",
        "inspector",
        "--checkout",
    ]);
    assert_eq!(detail["data"]["gallery"]["preview"], "lot/civic2.jpg");
    let url = detail["data"]["checkout"]["target"]["url"]
        .as_str()
        .expect("order url")
        .to_string();

    let order = env.run_json_fixture(&["order", &url]);
    assert_eq!(order["data"]["validator"]["name"], "Lot Inspector");
    assert_eq!(order["data"]["total"], "$18,500");

    let report = env.run_json_fixture(&["validate"]);
    assert_eq!(report["data"]["name"], "fixture-lot");
    assert_eq!(report["data"]["vehicles"], 1);

    let gle = env.run_json_fixture(&["product", "car=gle53"]);
    assert_eq!(gle["data"]["status"], "not_found");
}

#[test]
fn payment_and_validation_stubs_follow_the_order_page() {
    let env = TestEnv::new();

    let paid = env.run_json(&["pay", "carKey=gle53&validatorId=validator2"]);
    assert_eq!(paid["data"]["order"]["status"], "found");
    assert_eq!(paid["data"]["receipt"]["capability"], "payment");
    assert_eq!(paid["data"]["receipt"]["implemented"], false);

    let confirmed = env.run_json(&["confirm-validation", "carKey=gle53&validatorId=validator2"]);
    assert_eq!(confirmed["data"]["receipt"]["capability"], "validation");

    let missing = env.run_json(&["pay", "carKey=gle53"]);
    assert_eq!(missing["data"]["order"]["status"], "not_found");
    assert!(missing["data"].get("receipt").is_none());
}

#[test]
fn validators_listing_covers_all_seven() {
    let env = TestEnv::new();
    let out = env.run_json(&["validators"]);
    let list = out["data"].as_array().expect("validators");
    assert_eq!(list.len(), 7);
    assert_eq!(list[4]["status"], "Offline");
    assert_eq!(list[4]["stars"], 4);
    assert!(list.iter().all(|v| v["selected"] == false));
}

#[test]
fn verbose_logs_go_to_stderr_only() {
    let env = TestEnv::new();
    let out = env
        .cmd()
        .args(["-v", "--json", "browse"])
        .assert()
        .success()
        .get_output()
        .clone();
    let parsed: Value = serde_json::from_slice(&out.stdout).expect("stdout stays json");
    assert_eq!(parsed["ok"], true);
    assert!(String::from_utf8_lossy(&out.stderr).contains("catalog ready"));
}
