use checkmate::error::AppError;
use checkmate::results::{ResultPresenter, ResultView, TracingNotifier};
use clap::Args;
use std::fmt::Write as _;
use std::path::PathBuf;
use std::sync::Arc;

#[derive(Args, Debug)]
pub(crate) struct ShowArgs {
    /// JSON file holding the summary and the two document references
    #[arg(long)]
    pub(crate) input: PathBuf,
    /// Open the detail panel for the requirement at this position (0-based)
    #[arg(long)]
    pub(crate) select: Option<usize>,
}

pub(crate) fn run_show(args: ShowArgs) -> Result<(), AppError> {
    let ShowArgs { input, select } = args;

    let raw = std::fs::read_to_string(&input)?;
    let mut presenter = ResultPresenter::from_json(&raw, Arc::new(TracingNotifier));
    if let Some(index) = select {
        if presenter.has_data() && !presenter.activate(index) {
            eprintln!("no requirement at position {index}");
        }
    }

    print!("{}", render_result_page(&presenter.view()));
    Ok(())
}

pub(crate) fn render_result_page(view: &ResultView) -> String {
    let board = match view {
        ResultView::NoData { message } => return format!("{message}\n"),
        ResultView::Ready(board) => board,
    };

    let mut page = String::new();
    writeln!(page, "분석 결과").expect("write title");
    writeln!(page, "점수: {}", board.score_label).expect("write score");
    for entry in &board.counts {
        writeln!(page, "- {}: {}", entry.status_label, entry.count).expect("write count");
    }

    writeln!(page, "\n요구사항별 상세 결과").expect("write detail title");
    if board.items.is_empty() {
        writeln!(page, "(상세 결과 없음)").expect("write empty list");
    }
    for item in &board.items {
        writeln!(
            page,
            "{:>3}. [{}] {}",
            item.index, item.status_label, item.requirement_text
        )
        .expect("write item");
    }

    if let Some(panel) = &board.inspection {
        writeln!(page, "\n근거 보기").expect("write panel title");
        writeln!(page, "요구사항: {}", panel.requirement_text).expect("write requirement");
        writeln!(page, "판정: {}", panel.status_label).expect("write verdict");
        writeln!(page, "근거: {}", panel.evidence).expect("write evidence");
        if let Some(coverage) = &panel.keyword_coverage {
            writeln!(page, "키워드 일치: {coverage}").expect("write coverage");
        }
    }

    page
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_board_with_open_panel() {
        let raw = r#"{
            "summary": {
                "fulfilled": 2, "partial": 1, "notFulfilled": 1,
                "details": [
                    {"requirementText": "로그인", "status": "FULFILLED", "evidence": "auth.rs"},
                    {"requirementText": "검색", "status": "PARTIAL", "reason": "일부 구현", "matchedKeywordCount": 1, "totalKeywordCount": 3}
                ]
            },
            "requirementsFile": "req.pdf",
            "submissionFile": "sub.pdf"
        }"#;
        let mut presenter = ResultPresenter::from_json(raw, Arc::new(TracingNotifier));
        assert!(presenter.activate(1));

        let page = render_result_page(&presenter.view());

        assert!(page.contains("점수: 62.5점"));
        assert!(page.contains("[부분 충족] 검색"));
        assert!(page.contains("근거: 일부 구현"));
        assert!(page.contains("키워드 일치: 1/3"));
    }

    #[test]
    fn renders_fallback_for_missing_summary() {
        let presenter = ResultPresenter::from_json("{}", Arc::new(TracingNotifier));
        assert_eq!(
            render_result_page(&presenter.view()),
            "결과 데이터가 없습니다. 다시 분석해주세요.\n"
        );
    }
}
