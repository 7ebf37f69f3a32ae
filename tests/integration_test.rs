use paper_question_extract::logger;
use paper_question_extract::orchestrator::{process_document, DocOutcome};
use paper_question_extract::services::record_writer::OutputFormat;
use paper_question_extract::{Config, ParsedPaper, QuestionType};
use std::path::PathBuf;

/// 为每个测试创建独立的临时目录，避免并发测试互相干扰
fn temp_workspace(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("pqe_it_{}_{}", std::process::id(), name));
    std::fs::create_dir_all(&dir).expect("创建临时目录失败");
    dir
}

fn test_config(workspace: &PathBuf, format: OutputFormat) -> Config {
    Config {
        output_folder: workspace.join("out").to_string_lossy().to_string(),
        output_format: format,
        warn_file: workspace.join("warn.txt").to_string_lossy().to_string(),
        ..Config::default()
    }
}

/// 端到端：分页文本 → 解析 → 写出 JSON 记录
#[tokio::test]
async fn test_parse_document_and_write_json() {
    logger::try_init();

    let workspace = temp_workspace("json");
    let doc_path = workspace.join("de_thi_thu.txt");

    // 两页文本，以换页符分隔；第一页含答案提示噪声行
    let text = "ĐỀ THI THỬ MÔN VẬT LÝ\n\
                Câu 1: Đơn vị của lực là gì?\n\
                A. Newton\n\
                B. Joule\n\
                C/ Watt\n\
                D- Pascal\n\
                Đáp án: A\n\
                \u{0C}\
                Câu 2. Phát biểu định luật\n\
                bảo toàn năng lượng\n\
                1) Đúng\n\
                2) Sai\n";
    tokio::fs::write(&doc_path, text).await.expect("写测试文件失败");

    let config = test_config(&workspace, OutputFormat::Json);
    let outcome = process_document(&doc_path, 1, &config)
        .await
        .expect("处理文档失败");

    assert_eq!(outcome, DocOutcome::Extracted { questions: 2 });

    // 读回 JSON 验证输出契约
    let body = tokio::fs::read_to_string(workspace.join("out").join("de_thi_thu.json"))
        .await
        .expect("读取输出文件失败");
    let paper: ParsedPaper = serde_json::from_str(&body).expect("输出不是合法 JSON");

    assert_eq!(paper.name, "de_thi_thu");
    assert_eq!(paper.questions.len(), 2);

    let q1 = &paper.questions[0];
    assert_eq!(q1.content, "Đơn vị của lực là gì?");
    assert_eq!(q1.question_type, QuestionType::Mcq);
    assert_eq!(q1.score, 1.0);
    assert_eq!(
        q1.options.iter().map(|o| o.content.as_str()).collect::<Vec<_>>(),
        vec!["Newton", "Joule", "Watt", "Pascal"]
    );
    assert!(q1.options.iter().all(|o| !o.is_correct));

    // 跨行题干被空格拼接；数字式选项标记不出现在内容里
    let q2 = &paper.questions[1];
    assert_eq!(q2.content, "Phát biểu định luật bảo toàn năng lượng");
    assert_eq!(
        q2.options.iter().map(|o| o.content.as_str()).collect::<Vec<_>>(),
        vec!["Đúng", "Sai"]
    );

    // 噪声行不得泄漏进任何输出内容
    assert!(!body.contains("Đáp án"));

    std::fs::remove_dir_all(&workspace).ok();
}

/// 端到端：TOML 输出供人工复核编辑
#[tokio::test]
async fn test_parse_document_and_write_toml() {
    logger::try_init();

    let workspace = temp_workspace("toml");
    let doc_path = workspace.join("de_mau.txt");

    tokio::fs::write(&doc_path, "Câu 1: Một cộng một bằng mấy?\nA. 1\nB. 2\n")
        .await
        .expect("写测试文件失败");

    let config = test_config(&workspace, OutputFormat::Toml);
    let outcome = process_document(&doc_path, 1, &config)
        .await
        .expect("处理文档失败");

    assert_eq!(outcome, DocOutcome::Extracted { questions: 1 });

    let body = tokio::fs::read_to_string(workspace.join("out").join("de_mau.toml"))
        .await
        .expect("读取输出文件失败");
    let paper: ParsedPaper = toml::from_str(&body).expect("输出不是合法 TOML");
    assert_eq!(paper.questions[0].options.len(), 2);

    std::fs::remove_dir_all(&workspace).ok();
}

/// 未识别出任何题目的文档写入 warn.txt，不产生记录文件
#[tokio::test]
async fn test_unrecognized_document_goes_to_warn_file() {
    logger::try_init();

    let workspace = temp_workspace("warn");
    let doc_path = workspace.join("tieu_de.txt");

    tokio::fs::write(&doc_path, "Chỉ có tiêu đề\nvà vài dòng giới thiệu\n")
        .await
        .expect("写测试文件失败");

    let config = test_config(&workspace, OutputFormat::Json);
    let outcome = process_document(&doc_path, 1, &config)
        .await
        .expect("处理文档失败");

    assert_eq!(outcome, DocOutcome::Empty);

    let warn_body = tokio::fs::read_to_string(workspace.join("warn.txt"))
        .await
        .expect("warn.txt 应存在");
    assert!(warn_body.contains("tieu_de"));
    assert!(warn_body.contains("Câu 1:"), "警告里应包含支持的题号格式提示");

    assert!(!workspace.join("out").join("tieu_de.json").exists());

    std::fs::remove_dir_all(&workspace).ok();
}

/// 抽取失败（非 UTF-8 内容）被降级为空结果，与未识别共用同一出口
#[tokio::test]
async fn test_extraction_failure_is_absorbed() {
    logger::try_init();

    let workspace = temp_workspace("broken");
    let doc_path = workspace.join("hong.txt");

    tokio::fs::write(&doc_path, [0xFFu8, 0xFE, 0x00, 0x41])
        .await
        .expect("写测试文件失败");

    let config = test_config(&workspace, OutputFormat::Json);
    let outcome = process_document(&doc_path, 1, &config)
        .await
        .expect("抽取失败不应向上传播");

    assert_eq!(outcome, DocOutcome::Empty);

    std::fs::remove_dir_all(&workspace).ok();
}
