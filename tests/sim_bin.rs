use std::process::Command;

#[test]
fn sim_binary_smoke() {
    let output = Command::new(env!("CARGO_BIN_EXE_sim"))
        .args(["--games", "5", "--seed", "7"])
        .env("BROADSIDE_LOG", "off")
        .output()
        .expect("failed to run sim binary");
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).expect("non utf8 output");
    let v: serde_json::Value = serde_json::from_str(stdout.trim()).expect("invalid json");
    assert_eq!(v["games"], 5);
    assert_eq!(v["unfinished"], 0);
    assert!(v["max_shots"].as_u64().unwrap() <= 100);
}

#[test]
fn sim_binary_custom_fleet() {
    let output = Command::new(env!("CARGO_BIN_EXE_sim"))
        .args(["--board-size", "8", "--fleet", "3,2,2", "--seed", "1"])
        .env("BROADSIDE_LOG", "off")
        .output()
        .expect("failed to run sim binary");
    assert!(output.status.success());
    let v: serde_json::Value =
        serde_json::from_str(String::from_utf8_lossy(&output.stdout).trim()).expect("invalid json");
    assert_eq!(v["board_size"], 8);
    assert_eq!(v["fleet"], serde_json::json!([3, 2, 2]));
    assert!(v["max_shots"].as_u64().unwrap() <= 64);
}

#[test]
fn sim_binary_rejects_oversized_ship() {
    let output = Command::new(env!("CARGO_BIN_EXE_sim"))
        .args(["--board-size", "4", "--fleet", "5"])
        .env("BROADSIDE_LOG", "off")
        .output()
        .expect("failed to run sim binary");
    assert!(!output.status.success());
}
