use schtasks_core::core::{parse_toml_file, run_report};
use schtasks_core::structs::toml::{Output, QueryOptions, ReportToml};
use serde_json::Value;
use std::fs::{read, read_to_string, remove_file};
use std::path::PathBuf;

fn test_location(path: &str) -> String {
    let mut location = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    location.push(path);
    location.display().to_string()
}

fn report_config(format: &str, path: &str, query: QueryOptions) -> ReportToml {
    ReportToml {
        root_directory: test_location("tests/test_data/tasks"),
        output: Output {
            format: format.to_string(),
            path: Some(path.to_string()),
            template: Some(test_location("tests/test_data/report.html")),
            logging: None,
        },
        query,
    }
}

#[test]
fn test_task_report_json() {
    let out = "./tmp_tester_full.json";
    run_report(&report_config("json", out, QueryOptions::default())).unwrap();

    let report: Value = serde_json::from_str(&read_to_string(out).unwrap()).unwrap();
    remove_file(out).unwrap();

    let records = report.as_array().unwrap();
    assert_eq!(records.len(), 6);

    // Default sort is (task_path, task_name)
    let names: Vec<&str> = records
        .iter()
        .map(|record| record["task_name"].as_str().unwrap())
        .collect();
    assert_eq!(
        names,
        vec![
            "Heartbeat",
            "WeeklyBackup",
            "ScheduledDefrag",
            "HiddenUpdater",
            "BootCheck",
            "LogonHelper"
        ]
    );

    let heartbeat = &records[0];
    assert_eq!(heartbeat["task_path"], ".");
    assert_eq!(heartbeat["triggers"], serde_json::json!(["TimeTrigger"]));
    assert_eq!(
        heartbeat["schedule_time"],
        serde_json::json!({"duration": "PT1H", "interval": "PT5M", "stopAtEnd": "true"})
    );

    let weekly = &records[1];
    assert_eq!(
        weekly["schedule_time"],
        serde_json::json!({
            "schedule": "ScheduleByWeek",
            "daysOfWeek": ["Monday", "Friday"],
            "weeksInterval": "2"
        })
    );

    let defrag = &records[2];
    assert_eq!(defrag["task_path"], "Microsoft/Windows/Defrag");
    assert_eq!(defrag["enabled"], true);
    assert_eq!(defrag["hidden"], false);
    assert_eq!(defrag["exec_command"], "%windir%\\System32\\defrag.exe");
    assert_eq!(defrag["exec_args"], "");
    assert_eq!(
        defrag["schedule_time"],
        serde_json::json!({"schedule": "ScheduleByDay", "dayInterval": "1"})
    );

    let hidden = &records[3];
    assert_eq!(hidden["enabled"], false);
    assert_eq!(hidden["hidden"], true);
    assert_eq!(hidden["triggers"], serde_json::json!([]));
    assert_eq!(hidden["schedule_time"], "N/A");
}

#[test]
fn test_task_report_only_hidden() {
    let out = "./tmp_tester_hidden.json";
    let query = QueryOptions {
        only_hidden: true,
        ..Default::default()
    };
    run_report(&report_config("json", out, query)).unwrap();

    let report: Value = serde_json::from_str(&read_to_string(out).unwrap()).unwrap();
    remove_file(out).unwrap();

    let records = report.as_array().unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0]["task_name"], "HiddenUpdater");
}

#[test]
fn test_task_report_trigger_filter() {
    let out = "./tmp_tester_triggers.json";
    let query = QueryOptions {
        filter_trigger_kinds: vec![String::from("BootTrigger"), String::from("LogonTrigger")],
        ..Default::default()
    };
    run_report(&report_config("json", out, query)).unwrap();

    let report: Value = serde_json::from_str(&read_to_string(out).unwrap()).unwrap();
    remove_file(out).unwrap();

    let records = report.as_array().unwrap();
    assert_eq!(records.len(), 2);
    assert_eq!(records[0]["task_name"], "BootCheck");
    assert_eq!(records[1]["task_name"], "LogonHelper");
}

#[test]
fn test_task_report_name_and_path_filters() {
    let out = "./tmp_tester_name_path.json";
    let query = QueryOptions {
        filter_task_names: vec![String::from("BootCheck"), String::from("ScheduledDefrag")],
        filter_task_paths: vec![String::from("Microsoft/Windows/Startup")],
        ..Default::default()
    };
    run_report(&report_config("json", out, query)).unwrap();

    let report: Value = serde_json::from_str(&read_to_string(out).unwrap()).unwrap();
    remove_file(out).unwrap();

    // Name and path filters keep only their intersection
    let records = report.as_array().unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0]["task_name"], "BootCheck");
    assert_eq!(records[0]["task_path"], "Microsoft/Windows/Startup");
}

#[test]
fn test_task_report_csv_deterministic() {
    let first = "./tmp_tester_first.csv";
    let second = "./tmp_tester_second.csv";
    let query = QueryOptions {
        include_raw: true,
        ..Default::default()
    };
    run_report(&report_config("csv", first, query)).unwrap();
    let query = QueryOptions {
        include_raw: true,
        ..Default::default()
    };
    run_report(&report_config("csv", second, query)).unwrap();

    let first_data = read(first).unwrap();
    let second_data = read(second).unwrap();
    remove_file(first).unwrap();
    remove_file(second).unwrap();

    assert_eq!(first_data, second_data);

    let header = String::from_utf8(first_data).unwrap();
    let header = header.lines().next().unwrap().to_string();
    assert!(header.starts_with(
        "task_path,task_name,enabled,hidden,triggers,exec_command,exec_args,schedule_time"
    ));
    assert!(header.contains("Settings.Enabled"));
    assert!(header.contains("Triggers.TimeTrigger.Repetition.Duration"));
}

#[test]
fn test_task_report_html() {
    let out = "./tmp_tester_report.html";
    run_report(&report_config("html", out, QueryOptions::default())).unwrap();

    let document = read_to_string(out).unwrap();
    remove_file(out).unwrap();

    assert!(document.contains("<table id=\"task-report\">"));
    assert!(!document.contains("{{TABLE_CONTENT}}"));
    assert!(document.contains("<td>ScheduledDefrag</td>"));
    assert!(document.contains("<td>[TimeTrigger]</td>"));
}

#[test]
fn test_task_report_from_toml() {
    let results = parse_toml_file(&test_location("tests/test_data/tasks.toml")).unwrap();
    assert_eq!(results, ());

    let report = read_to_string("./tmp_toml_report.json").unwrap();
    remove_file("./tmp_toml_report.json").unwrap();
    assert!(report.contains("ScheduledDefrag"));
}
