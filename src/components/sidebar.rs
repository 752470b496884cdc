use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::app::{App, Focus, SidebarEntry};
use crate::calendar::FilterMode;
use crate::hitmap::{HitMap, Target};

const EMPTY_PROJECTS: &str = "등록된 프로젝트가 없습니다.";

pub struct Sidebar;

impl Sidebar {
    pub fn render(frame: &mut Frame, area: Rect, app: &App, hits: &mut HitMap) {
        let theme = &app.theme;
        let focused = app.focus == Focus::Sidebar;

        let hints = if focused { " Enter:필터 e:수정 d:삭제 s:공유 " } else { " p:포커스 " };
        let block = Block::default()
            .title(" 프로젝트 ")
            .title_style(theme.header)
            .title_bottom(Line::from(Span::styled(hints, theme.dim)))
            .borders(Borders::ALL)
            .border_style(if focused { theme.accent } else { theme.border });

        let inner = block.inner(area);
        frame.render_widget(block, area);

        let store = app.store();
        let mut lines: Vec<Line> = Vec::new();
        let mut row_targets: Vec<Option<Target>> = Vec::new();

        for (idx, entry) in app.sidebar_entries().into_iter().enumerate() {
            if entry == SidebarEntry::Personal && store.projects().is_empty() {
                lines.push(Line::styled(EMPTY_PROJECTS, theme.dim));
                row_targets.push(None);
            }
            if entry == SidebarEntry::Personal {
                lines.push(Line::from(""));
                row_targets.push(None);
            }

            let active = match &entry {
                SidebarEntry::All => app.filter == FilterMode::All,
                SidebarEntry::Project(id) => app.filter.is_project_selected(id),
                SidebarEntry::Personal => app.filter.is_personal_only(),
            };
            let marker = if active { "✓ " } else { "  " };

            let mut spans = vec![Span::styled(marker, theme.accent)];
            let target = match &entry {
                SidebarEntry::All => {
                    spans.push(Span::raw("전체 보기"));
                    Target::AllProjects
                }
                SidebarEntry::Project(id) => {
                    if let Some(project) = store.project(id) {
                        let swatch = Style::default().fg(project.display_color());
                        spans.push(Span::styled("■ ", swatch));
                        spans.push(Span::raw(project.name.clone()));
                        if project.is_shared {
                            spans.push(Span::styled(" 공유됨", theme.dim));
                        }
                    }
                    Target::Project(id.clone())
                }
                SidebarEntry::Personal => {
                    spans.push(Span::raw("개인 일정"));
                    Target::PersonalFilter
                }
            };

            let mut line = Line::from(spans);
            if focused && idx == app.sidebar_cursor {
                line = line.patch_style(theme.highlight);
            } else if active {
                line = line.patch_style(Style::default().add_modifier(Modifier::BOLD));
            }
            lines.push(line);
            row_targets.push(Some(target));
        }

        for (row, target) in row_targets.into_iter().enumerate() {
            if row as u16 >= inner.height {
                break;
            }
            if let Some(target) = target {
                hits.push(
                    Rect {
                        y: inner.y + row as u16,
                        height: 1,
                        ..inner
                    },
                    target,
                );
            }
        }

        frame.render_widget(Paragraph::new(lines), inner);
    }
}
