use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use super::form;
use crate::theme::Theme;

const CALENDAR_KEYS: &[(&str, &str)] = &[
    ("←→ h l", "이전/다음 날"),
    ("↑↓ k j", "이전/다음 주"),
    ("[ ]", "이전/다음 기간"),
    ("t", "오늘로 이동"),
    ("1 2 v", "주간/월간 보기"),
    ("Tab", "다음 항목"),
    ("Enter", "상세 보기"),
    ("Space", "TODO 완료 토글"),
    ("e d", "수정 / 삭제"),
    ("m", "TODO 이동 (다시 m: 놓기)"),
    ("a n P", "새 TODO / 일정 / 프로젝트"),
    ("p", "프로젝트 목록"),
    ("T", "라이트/다크 테마"),
    ("q", "종료"),
];

const SIDEBAR_KEYS: &[(&str, &str)] = &[
    ("Enter", "필터 켜기/끄기"),
    ("e d", "프로젝트 수정 / 삭제"),
    ("s", "공유 링크 복사"),
];

pub fn render(frame: &mut Frame, area: Rect, theme: &Theme) {
    let height = (CALENDAR_KEYS.len() + SIDEBAR_KEYS.len() + 6) as u16;
    let popup = form::popup_area(area, 48, height);
    frame.render_widget(Clear, popup);

    let block = Block::default()
        .title(" 도움말 ")
        .title_style(theme.accent.add_modifier(Modifier::BOLD))
        .borders(Borders::ALL)
        .border_style(theme.accent);
    let inner = block.inner(popup);
    frame.render_widget(block, popup);

    let key_line = |(key, desc): &(&str, &str)| {
        Line::from(vec![
            Span::styled(format!("{:<10}", key), Style::default().add_modifier(Modifier::BOLD)),
            Span::raw(desc.to_string()),
        ])
    };

    let mut lines = vec![Line::styled("달력", theme.header)];
    lines.extend(CALENDAR_KEYS.iter().map(key_line));
    lines.push(Line::from(""));
    lines.push(Line::styled("프로젝트 목록", theme.header));
    lines.extend(SIDEBAR_KEYS.iter().map(key_line));
    lines.push(Line::from(""));
    lines.push(Line::styled("마우스: 날짜 클릭, TODO 끌어서 옮기기", theme.dim));

    frame.render_widget(Paragraph::new(lines), inner);
}
