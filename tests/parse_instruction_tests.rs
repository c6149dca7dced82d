//! Instruction parsing tests covering the four intents end to end
mod common;

use chrono::Duration;
use gantt_mcp::*;

#[tokio::test]
async fn test_create_with_tomorrow_start() {
    let handler = common::get_test_handler();
    let response = handler
        .handle_parse_instruction("明天开始做网站项目，两周".to_string())
        .await
        .unwrap();
    assert!(response.contains("Created project '网站开发项目'"), "{response}");

    let export = common::as_json(&handler.handle_export_project().await.unwrap());
    let tomorrow = local_date_today() + Duration::days(1);
    assert_eq!(export["project"]["tasks"][0]["start"], tomorrow.to_string());
}

#[tokio::test]
async fn test_create_app_project_with_numeral_weeks() {
    let handler = common::get_test_handler();
    let response = handler
        .handle_parse_instruction("做个APP项目，两周".to_string())
        .await
        .unwrap();
    assert!(
        response.contains("Created project '移动应用开发' with 5 task(s)"),
        "{response}"
    );
}

#[tokio::test]
async fn test_create_from_clauses_pins_durations() {
    let handler = common::get_test_handler();
    handler
        .handle_parse_instruction("新建产品计划，需求3天，设计5天，开发十天，测试2天".to_string())
        .await
        .unwrap();

    let export = common::as_json(&handler.handle_export_project().await.unwrap());
    let tasks = export["project"]["tasks"].as_array().unwrap();
    assert_eq!(export["project"]["name"], "产品");
    assert_eq!(tasks.len(), 4);
    assert_eq!(tasks[0]["name"], "需求分析");
    assert_eq!(tasks[0]["duration"], 3);
    assert_eq!(tasks[1]["name"], "UI/UX设计");
    assert_eq!(tasks[1]["duration"], 5);
    assert_eq!(tasks[2]["name"], "程序开发");
    assert_eq!(tasks[2]["duration"], 10);
    assert_eq!(tasks[3]["name"], "测试验收");
    assert_eq!(tasks[3]["duration"], 2);
}

#[tokio::test]
async fn test_create_tiny_total_still_renders() {
    let handler = common::get_test_handler();
    let response = handler
        .handle_parse_instruction("新建活动计划，2天".to_string())
        .await
        .unwrap();
    assert!(response.contains("with 1 task(s) over 2 day(s)"), "{response}");

    let export = common::as_json(&handler.handle_export_project().await.unwrap());
    assert_eq!(export["project"]["tasks"][0]["name"], "开发实施");
    assert_eq!(export["project"]["tasks"][0]["duration"], 2);
}

#[tokio::test]
async fn test_strict_policy_chains_back_to_back() {
    let today = local_date_today();

    let strict = common::get_strict_handler();
    strict
        .handle_parse_instruction("创建项目，需求2天，开发3天".to_string())
        .await
        .unwrap();
    let export = common::as_json(&strict.handle_export_project().await.unwrap());
    assert_eq!(
        export["project"]["tasks"][1]["start"],
        (today + Duration::days(2)).to_string()
    );

    let buffered = common::get_test_handler();
    buffered
        .handle_parse_instruction("创建项目，需求2天，开发3天".to_string())
        .await
        .unwrap();
    let export = common::as_json(&buffered.handle_export_project().await.unwrap());
    assert_eq!(
        export["project"]["tasks"][1]["start"],
        (today + Duration::days(3)).to_string()
    );
}

#[tokio::test]
async fn test_add_appends_after_last_task() {
    let handler = common::get_test_handler();
    handler
        .handle_parse_instruction("创建网站开发项目，三周时间".to_string())
        .await
        .unwrap();

    let response = handler
        .handle_parse_instruction("添加部署任务，2天".to_string())
        .await
        .unwrap();
    assert!(response.contains("Added task '部署' (2 day(s)"), "{response}");
    assert!(!response.contains("after"), "{response}");

    let export = common::as_json(&handler.handle_export_project().await.unwrap());
    let tasks = export["project"]["tasks"].as_array().unwrap();
    assert_eq!(tasks.len(), 6);
    assert_eq!(tasks[5]["name"], "部署");
}

#[tokio::test]
async fn test_add_without_duration_uses_default() {
    let handler = common::get_test_handler();
    handler.handle_load_sample().await.unwrap();

    let response = handler
        .handle_parse_instruction("添加部署任务".to_string())
        .await
        .unwrap();
    assert!(response.contains("Added task '部署' (5 day(s)"), "{response}");
}

#[tokio::test]
async fn test_add_casual_form() {
    let handler = common::get_test_handler();
    handler.handle_load_sample().await.unwrap();

    let response = handler
        .handle_parse_instruction("再加测试进去，3天".to_string())
        .await
        .unwrap();
    assert!(response.contains("Added task '测试验收' (3 day(s)"), "{response}");
}

#[tokio::test]
async fn test_add_after_loose_prefix_match() {
    let handler = common::get_test_handler();
    handler
        .handle_parse_instruction("创建网站开发项目，三周时间".to_string())
        .await
        .unwrap();

    let response = handler
        .handle_parse_instruction("在测试后添加上线准备任务，2天".to_string())
        .await
        .unwrap();
    assert!(response.contains("Added task '上线准备'"), "{response}");
    assert!(response.contains("after '测试与上线'"), "{response}");
}

#[tokio::test]
async fn test_edit_extends_all_matching_tasks() {
    let handler = common::get_test_handler();
    handler
        .handle_parse_instruction("创建网站开发项目，三周时间".to_string())
        .await
        .unwrap();

    let response = handler
        .handle_parse_instruction("把开发时间延长3天".to_string())
        .await
        .unwrap();
    assert!(
        response.contains("Adjusted 2 task(s) matching '开发': extended by 3 day(s)"),
        "{response}"
    );

    let export = common::as_json(&handler.handle_export_project().await.unwrap());
    let tasks = export["project"]["tasks"].as_array().unwrap();
    assert_eq!(tasks[2]["duration"], 8);
    assert_eq!(tasks[3]["duration"], 8);
}

#[tokio::test]
async fn test_edit_shorten_floors_at_one_day() {
    let handler = common::get_test_handler();
    let today = local_date_today();
    handler
        .handle_import_project(common::fixture_payload("演示", &[("程序开发", today, 2)]))
        .await
        .unwrap();

    let response = handler
        .handle_parse_instruction("把开发缩短5天".to_string())
        .await
        .unwrap();
    assert!(response.contains("shortened by 5 day(s)"), "{response}");

    let export = common::as_json(&handler.handle_export_project().await.unwrap());
    assert_eq!(export["project"]["tasks"][0]["duration"], 1);
}

#[tokio::test]
async fn test_edit_postpone_shifts_later() {
    let handler = common::get_test_handler();
    let today = local_date_today();
    handler
        .handle_import_project(common::fixture_payload("演示", &[("程序开发", today, 5)]))
        .await
        .unwrap();

    let response = handler
        .handle_parse_instruction("把开发推迟3天".to_string())
        .await
        .unwrap();
    assert!(
        response.contains("Adjusted 1 task(s) matching '开发': moved 3 day(s) later"),
        "{response}"
    );

    let export = common::as_json(&handler.handle_export_project().await.unwrap());
    assert_eq!(
        export["project"]["tasks"][0]["start"],
        (today + Duration::days(3)).to_string()
    );
}

#[tokio::test]
async fn test_delete_multiple_reports_count() {
    let handler = common::get_test_handler();
    let today = local_date_today();
    handler
        .handle_import_project(common::fixture_payload(
            "演示",
            &[
                ("前端开发", today, 5),
                ("后端开发", today + Duration::days(6), 5),
                ("测试验收", today + Duration::days(12), 3),
            ],
        ))
        .await
        .unwrap();

    let response = handler
        .handle_parse_instruction("删除开发任务".to_string())
        .await
        .unwrap();
    assert!(response.contains("Removed 2 task(s) matching '开发'"), "{response}");

    let export = common::as_json(&handler.handle_export_project().await.unwrap());
    let tasks = export["project"]["tasks"].as_array().unwrap();
    assert_eq!(tasks.len(), 1);
    assert_eq!(tasks[0]["name"], "测试验收");
}

#[tokio::test]
async fn test_delete_natural_form() {
    let handler = common::get_test_handler();
    let today = local_date_today();
    handler
        .handle_import_project(common::fixture_payload("演示", &[("集成测试", today, 3)]))
        .await
        .unwrap();

    let response = handler.handle_parse_instruction("不要测试了".to_string()).await.unwrap();
    assert!(response.contains("Removed 1 task(s) matching '测试'"), "{response}");
}

#[tokio::test]
async fn test_delete_missing_keyword_reports_not_found() {
    let handler = common::get_test_handler();
    let today = local_date_today();
    handler
        .handle_import_project(common::fixture_payload("演示", &[("需求分析", today, 3)]))
        .await
        .unwrap();

    let response = handler
        .handle_parse_instruction("删除培训任务".to_string())
        .await
        .unwrap();
    assert!(
        response.contains("No task matching '培训' found; schedule unchanged"),
        "{response}"
    );

    let export = common::as_json(&handler.handle_export_project().await.unwrap());
    assert_eq!(export["project"]["tasks"].as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn test_blank_instruction_rejected() {
    let handler = common::get_test_handler();
    assert!(handler.handle_parse_instruction("".to_string()).await.is_err());
    assert!(handler.handle_parse_instruction("  \n ".to_string()).await.is_err());
}
