use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyEventKind},
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    ExecutableCommand,
};
use ratatui::{
    prelude::*,
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Wrap},
};
use std::io::stdout;

use crate::app::{App, HomeFocus};
use crate::config::{APPLY_URL, CHAT_URL};
use crate::i18n::{chrome, job_type_label, translations, Language};
use crate::models::JobPosting;
use crate::nav::Page;

const BRAND: &str = "LAOS JOB";

pub fn run(app: &mut App) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let result = stdout()
        .execute(EnterAlternateScreen)
        .and_then(|_| Terminal::new(CrosstermBackend::new(stdout())))
        .map_err(anyhow::Error::from)
        .and_then(|mut terminal| run_loop(&mut terminal, app));

    // Restore terminal
    let restored = disable_raw_mode().and(stdout().execute(LeaveAlternateScreen).map(|_| ()));

    result.and(restored.map_err(anyhow::Error::from))
}

fn run_loop(terminal: &mut Terminal<CrosstermBackend<std::io::Stdout>>, app: &mut App) -> Result<()> {
    while !app.should_quit {
        terminal.draw(|frame| draw(frame, app))?;

        if let Event::Key(key) = event::read()? {
            if key.kind != KeyEventKind::Press {
                continue;
            }
            app.handle_key(key);
        }
    }
    Ok(())
}

pub fn draw(frame: &mut Frame, app: &App) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .split(frame.area());

    draw_header(frame, app, rows[0]);
    match app.nav.page() {
        Page::Home => draw_home(frame, app, rows[1]),
        Page::Listings => draw_listings(frame, app, rows[1]),
        Page::Detail => draw_detail(frame, app, rows[1]),
    }

    let help = match app.nav.page() {
        Page::Home => " type:search  enter:go  tab:jobs/search  F1:home  F2:language  F6:all jobs  esc:quit",
        Page::Listings => " type:filter  del:clear  F3:type  F4:category  F5:reset  up/down  enter:open  esc:home",
        Page::Detail => " up/down/pgup/pgdn:scroll  esc:back  F1:home  F2:language  q:quit",
    };
    let footer = Paragraph::new(help).style(Style::default().fg(Color::DarkGray));
    frame.render_widget(footer, rows[2]);
}

fn draw_header(frame: &mut Frame, app: &App, area: Rect) {
    let t = translations(app.lang);
    let c = chrome(app.lang);
    let active = Style::default().fg(Color::Red).add_modifier(Modifier::BOLD);
    let idle = Style::default().fg(Color::Gray);
    let (home_style, jobs_style) = match app.nav.page() {
        Page::Home => (active, idle),
        _ => (idle, active),
    };
    let line = Line::from(vec![
        Span::styled(format!(" {} ", BRAND), Style::default().fg(Color::White).bg(Color::Red).add_modifier(Modifier::BOLD)),
        Span::raw("  "),
        Span::styled(format!("{} [F1]", c.home), home_style),
        Span::raw("  "),
        Span::styled(format!("{} [F6]", t.find_jobs), jobs_style),
        Span::raw("  "),
        Span::styled(t.part_time, idle),
        Span::raw("  "),
        Span::styled(format!("{} {}", app.lang.flag(), app.lang.label()), idle),
        Span::raw("  "),
        Span::styled(format!("{}: {}", t.contact_us, CHAT_URL), Style::default().fg(Color::Green)),
    ]);
    frame.render_widget(Paragraph::new(line), area);
}

fn draw_home(frame: &mut Frame, app: &App, area: Rect) {
    let t = translations(app.lang);
    let c = chrome(app.lang);
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(7),
            Constraint::Length(3),
            Constraint::Min(0),
        ])
        .split(area);

    // Hero with search box
    let cursor = if app.home_focus == HomeFocus::Search { "_" } else { "" };
    let search = if app.home_search.is_empty() && app.home_focus != HomeFocus::Search {
        Span::styled(t.search_placeholder, Style::default().fg(Color::DarkGray))
    } else {
        Span::raw(format!("{}{}", app.home_search, cursor))
    };
    let hero = Paragraph::new(vec![
        Line::from(Span::styled(t.hero_title, Style::default().add_modifier(Modifier::BOLD))),
        Line::from(Span::styled(t.hero_sub, Style::default().fg(Color::Gray))),
        Line::from(""),
        Line::from(vec![Span::raw("🔍 "), search, Span::styled(format!("   [{}]", t.search_btn), Style::default().fg(Color::Red))]),
        Line::from(Span::styled(c.tagline, Style::default().fg(Color::DarkGray))),
    ])
    .block(Block::default().borders(Borders::ALL).title(format!(" {} ", BRAND)))
    .wrap(Wrap { trim: true });
    frame.render_widget(hero, chunks[0]);

    let categories: Vec<Span> = app
        .catalog
        .categories
        .iter()
        .flat_map(|cat| {
            [
                Span::raw(format!("{} {} ", cat.icon, cat.name)),
                Span::styled(format!("({} {})  ", cat.count, c.jobs_suffix), Style::default().fg(Color::DarkGray)),
            ]
        })
        .collect();
    let categories = Paragraph::new(Line::from(categories))
        .block(Block::default().borders(Borders::ALL).title(format!(" {} ", t.categories)))
        .wrap(Wrap { trim: true });
    frame.render_widget(categories, chunks[1]);

    let featured = app.featured();
    let recent = app.recent();
    let lists = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(chunks[2]);

    let jobs_focused = app.home_focus == HomeFocus::Jobs;
    let mut featured_state = ListState::default();
    let mut recent_state = ListState::default();
    if jobs_focused {
        if app.home_selected < featured.len() {
            featured_state.select(Some(app.home_selected));
        } else {
            recent_state.select(Some(app.home_selected - featured.len()));
        }
    }

    let featured_list = job_list(&featured, app.lang, format!(" 🔥 {} ", t.hot_jobs));
    frame.render_stateful_widget(featured_list, lists[0], &mut featured_state);
    let recent_list = job_list(&recent, app.lang, format!(" {} · {} [F6] ", c.recent_openings, t.view_all));
    frame.render_stateful_widget(recent_list, lists[1], &mut recent_state);
}

fn draw_listings(frame: &mut Frame, app: &App, area: Rect) {
    let Some(view) = &app.listing else { return };
    let t = translations(app.lang);
    let c = chrome(app.lang);
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(32), Constraint::Min(0)])
        .split(area);

    // Left panel: filters
    let type_label = view
        .filter
        .job_type
        .map(|jt| job_type_label(jt, app.lang))
        .unwrap_or(c.all_types);
    let category_label = view.filter.category.as_deref().unwrap_or(c.all_categories);
    let label = Style::default().fg(Color::DarkGray).add_modifier(Modifier::BOLD);
    let mut lines = vec![
        Line::from(Span::styled(c.keywords, label)),
        Line::from(format!("{}_", view.filter.query)),
        Line::from(""),
        Line::from(Span::styled(format!("{} (F3)", c.job_type), label)),
        Line::from(Span::styled(type_label, Style::default().fg(Color::Red))),
        Line::from(""),
        Line::from(Span::styled(format!("{} (F4)", t.categories), label)),
        Line::from(Span::styled(category_label, Style::default().fg(Color::Blue))),
    ];
    if !view.filter.is_unfiltered() {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled("F5: reset  Del: clear", Style::default().fg(Color::DarkGray))));
    }
    let sidebar = Paragraph::new(lines)
        .block(Block::default().borders(Borders::ALL).title(format!(" {} ", c.filters)))
        .wrap(Wrap { trim: false });
    frame.render_widget(sidebar, chunks[0]);

    // Right panel: results
    let visible = app.visible_jobs();
    let title = format!(" {} {} {} ", c.found, visible.len(), c.opportunities);
    if visible.is_empty() {
        let empty = Paragraph::new(vec![
            Line::from(""),
            Line::from(Span::styled(c.no_jobs_found, Style::default().add_modifier(Modifier::BOLD))),
            Line::from(Span::styled(c.no_jobs_hint, Style::default().fg(Color::DarkGray))),
        ])
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title(title));
        frame.render_widget(empty, chunks[1]);
        return;
    }

    let mut list_state = ListState::default();
    list_state.select(Some(view.selected));
    frame.render_stateful_widget(job_list(&visible, app.lang, title), chunks[1], &mut list_state);
}

fn draw_detail(frame: &mut Frame, app: &App, area: Rect) {
    let Some(job) = app.nav.selected() else { return };
    let c = chrome(app.lang);
    let detail = Paragraph::new(build_detail(job, app.lang))
        .block(Block::default().borders(Borders::ALL).title(format!(" ← {} ", c.back_to_listings)))
        .wrap(Wrap { trim: false })
        .scroll((app.nav.scroll(), 0));
    frame.render_widget(detail, area);
}

fn job_list<'a>(jobs: &[&'a JobPosting], lang: Language, title: String) -> List<'a> {
    let t = translations(lang);
    let c = chrome(lang);
    let items: Vec<ListItem> = jobs
        .iter()
        .map(|&job| {
            let mut header = Vec::new();
            if job.is_hot {
                header.push(Span::styled(format!("🔥 {} ", c.hot_badge), Style::default().fg(Color::Red)));
            }
            header.push(Span::styled(job.title.as_str(), Style::default().add_modifier(Modifier::BOLD)));
            header.push(Span::styled(
                format!("  [{}]", job_type_label(job.job_type, lang)),
                Style::default().fg(Color::Gray),
            ));
            ListItem::new(vec![
                Line::from(header),
                Line::from(vec![
                    Span::styled(job.company_name.as_str(), Style::default().fg(Color::Blue)),
                    Span::raw(format!(" • {} • {}, {}", job.category, job.location, job.country)),
                ]),
                Line::from(Span::styled(
                    format!("{}: {}", t.salary, job.salary_range),
                    Style::default().fg(Color::DarkGray),
                )),
            ])
        })
        .collect();

    List::new(items)
        .block(Block::default().borders(Borders::ALL).title(title))
        .highlight_style(Style::default().bg(Color::DarkGray).add_modifier(Modifier::BOLD))
        .highlight_symbol("> ")
}

/// Number of lines the detail page of `job` renders before wrapping.
pub fn detail_height(job: &JobPosting, lang: Language) -> u16 {
    u16::try_from(build_detail(job, lang).lines.len()).unwrap_or(u16::MAX)
}

fn build_detail(job: &JobPosting, lang: Language) -> Text<'_> {
    let t = translations(lang);
    let c = chrome(lang);
    let bold = Style::default().add_modifier(Modifier::BOLD);
    let mut lines: Vec<Line> = Vec::new();

    // Header
    lines.push(Line::from(Span::styled(&job.title, bold)));
    lines.push(Line::from(Span::styled(&job.company_name, Style::default().fg(Color::Blue))));
    lines.push(Line::from(vec![
        Span::styled(job_type_label(job.job_type, lang), Style::default().fg(Color::Red)),
        Span::styled(format!("  {}", job.posted_date), Style::default().fg(Color::DarkGray)),
    ]));
    lines.push(Line::from(""));

    lines.push(Line::from(format!("{}: {}", t.salary, job.salary_range)));
    lines.push(Line::from(format!("📍 {}: {}, {}", t.location, job.location, job.country)));
    lines.push(Line::from(format!("📅 {}", c.expires)));
    lines.push(Line::from(""));

    lines.push(Line::from(Span::styled(c.description, bold)));
    for line in textwrap::fill(&job.description, 70).lines() {
        lines.push(Line::from(format!("  {}", line)));
    }
    lines.push(Line::from(""));

    lines.push(Line::from(Span::styled(c.requirements, bold)));
    for req in &job.requirements {
        lines.push(Line::from(vec![
            Span::styled("  ✓ ", Style::default().fg(Color::Green)),
            Span::raw(req.as_str()),
        ]));
    }
    lines.push(Line::from(""));

    lines.push(Line::from(Span::styled(format!("{} {}", c.about, job.company_name), bold)));
    lines.push(Line::from(Span::styled(job.category.as_str(), Style::default().fg(Color::DarkGray))));
    lines.push(Line::from(Span::styled(job.company_logo.as_str(), Style::default().fg(Color::DarkGray))));
    lines.push(Line::from(""));

    lines.push(Line::from(Span::styled(
        format!("{}: {}", t.apply_now, APPLY_URL),
        Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
    )));

    Text::from(lines)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::tests::test_app;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    use ratatui::backend::TestBackend;

    fn render(app: &App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(140, 48)).unwrap();
        terminal.draw(|frame| draw(frame, app)).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    fn press(app: &mut App, code: KeyCode) {
        app.handle_key(KeyEvent::new(code, KeyModifiers::NONE));
    }

    #[test]
    fn test_home_renders_sections() {
        let app = test_app();
        let screen = render(&app);
        assert!(screen.contains(BRAND));
        assert!(screen.contains("Hot Jobs"));
        assert!(screen.contains("Recent Openings"));
        assert!(screen.contains("Software Engineer"));
    }

    #[test]
    fn test_listings_render_count_and_empty_state() {
        let mut app = test_app();
        press(&mut app, KeyCode::Enter);
        assert!(render(&app).contains("Found 6 opportunities"));

        for ch in "zzz".chars() {
            press(&mut app, KeyCode::Char(ch));
        }
        let screen = render(&app);
        assert!(screen.contains("Found 0 opportunities"));
        assert!(screen.contains("No jobs found"));
    }

    #[test]
    fn test_detail_renders_job() {
        let mut app = test_app();
        press(&mut app, KeyCode::Tab);
        press(&mut app, KeyCode::Enter);
        let screen = render(&app);
        assert!(screen.contains("Software Engineer"));
        assert!(screen.contains("Lao Telecom"));
        assert!(screen.contains("Back to listings"));
    }
}
