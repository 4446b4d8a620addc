//! MediGuide — interactive Ratatui shell
//!
//! Layout:
//!   ┌─── header ──────────────────────────────────────────────────────────┐
//!   │  MediGuide   [Symptoms] [Medicines] [Search] [Beds] [Profile]       │
//!   ├─── body ────────────────────────────────────────────────────────────┤
//!   │  per-tab content (inputs, chips, results)                           │
//!   ├─────────────────────────────────────────────────────────────────────┤
//!   │  footer (key bindings)                                              │
//!   └─────────────────────────────────────────────────────────────────────┘
//!
//! The shell owns the catalog snapshot and rebuilds a fresh `FilterQuery`
//! from its controls on every draw, so results track each keystroke. The
//! symptoms tab starts a mock analysis and polls its handle from the tick
//! loop until the canned response lands.

use std::{
    io,
    time::{Duration, Instant},
};

use crossterm::{
    event::{self, Event, KeyCode, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph, Wrap},
    Frame, Terminal,
};

use mediguide_analysis::{AnalysisHandle, SymptomAnalyzer};
use mediguide_catalog::Catalog;
use mediguide_contracts::{
    analysis::{Analysis, SymptomReport},
    directory::{BedSummary, HospitalBed},
    profile::{ProfileMenuItem, UserProfile},
    query::{CategorySelection, FilterQuery, PriceRange},
};
use mediguide_data::{
    mock_beds, mock_catalog, mock_profile, MockAnalyzer, APP_NAME, APP_TAGLINE, DISCLAIMER,
    FEATURES,
};

// ── Domain types ──────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Tab {
    Symptoms,
    Medicines,
    Search,
    Beds,
    Profile,
}

impl Tab {
    const ALL: [Tab; 5] = [
        Tab::Symptoms,
        Tab::Medicines,
        Tab::Search,
        Tab::Beds,
        Tab::Profile,
    ];

    fn name(self) -> &'static str {
        match self {
            Tab::Symptoms => "Symptoms",
            Tab::Medicines => "Medicines",
            Tab::Search => "Search",
            Tab::Beds => "Beds",
            Tab::Profile => "Profile",
        }
    }

    fn next(self) -> Tab {
        let idx = Tab::ALL.iter().position(|t| *t == self).unwrap_or(0);
        Tab::ALL[(idx + 1) % Tab::ALL.len()]
    }

    fn prev(self) -> Tab {
        let idx = Tab::ALL.iter().position(|t| *t == self).unwrap_or(0);
        Tab::ALL[(idx + Tab::ALL.len() - 1) % Tab::ALL.len()]
    }
}

/// Which control on the search tab currently receives keystrokes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SearchField {
    Query,
    Categories,
    Min,
    Max,
}

impl SearchField {
    fn next(self) -> SearchField {
        match self {
            SearchField::Query => SearchField::Categories,
            SearchField::Categories => SearchField::Min,
            SearchField::Min => SearchField::Max,
            SearchField::Max => SearchField::Query,
        }
    }

    fn prev(self) -> SearchField {
        match self {
            SearchField::Query => SearchField::Max,
            SearchField::Categories => SearchField::Query,
            SearchField::Min => SearchField::Categories,
            SearchField::Max => SearchField::Min,
        }
    }
}

// ── App state ─────────────────────────────────────────────────────────────────

struct App {
    tab: Tab,

    // Static data the shell owns for its lifetime.
    catalog: Catalog,
    beds: Vec<HospitalBed>,
    profile: UserProfile,
    analyzer: MockAnalyzer,

    // Symptoms tab.
    symptom_text: String,
    pending: Option<AnalysisHandle>,
    analysis: Option<Analysis>,
    analysis_error: Option<String>,
    spinner_frame: usize,

    // Medicines tab: search text plus a single-select chip row where
    // position 0 is "All" (no restriction).
    med_query: String,
    med_chip: usize,

    // Search tab: full query controls.
    search_query: String,
    search_selected: CategorySelection,
    search_chip_cursor: usize,
    min_input: String,
    max_input: String,
    search_focus: SearchField,

    last_tick: Instant,
}

impl App {
    fn new(catalog: Catalog) -> Self {
        Self {
            tab: Tab::Symptoms,
            catalog,
            beds: mock_beds(),
            profile: mock_profile(),
            analyzer: MockAnalyzer::new(),
            symptom_text: String::new(),
            pending: None,
            analysis: None,
            analysis_error: None,
            spinner_frame: 0,
            med_query: String::new(),
            med_chip: 0,
            search_query: String::new(),
            search_selected: CategorySelection::default(),
            search_chip_cursor: 0,
            min_input: String::new(),
            max_input: String::new(),
            search_focus: SearchField::Query,
            last_tick: Instant::now(),
        }
    }

    /// Start an analysis for the current symptom text, unless one is
    /// already in flight or the report is blank (button-disabled state).
    fn start_analysis(&mut self) {
        if self.pending.is_some() {
            return;
        }
        let report = SymptomReport::new(self.symptom_text.clone());
        if report.is_blank() {
            return;
        }
        self.analysis = None;
        self.analysis_error = None;
        self.spinner_frame = 0;
        self.pending = Some(self.analyzer.analyze(&report));
    }

    /// Poll the in-flight analysis, if any. Called every loop iteration.
    fn poll_analysis(&mut self) {
        let Some(handle) = &self.pending else {
            return;
        };
        match handle.try_recv() {
            None => {}
            Some(Ok(analysis)) => {
                self.analysis = Some(analysis);
                self.pending = None;
            }
            Some(Err(e)) => {
                self.analysis_error = Some(e.to_string());
                self.pending = None;
            }
        }
    }

    /// Advance the spinner while an analysis is in flight.
    fn tick_animation(&mut self) {
        if self.pending.is_some() {
            self.spinner_frame = self.spinner_frame.wrapping_add(1);
        }
    }

    /// The medicines tab's query: text plus the single selected chip.
    fn medicines_query(&self) -> FilterQuery {
        let mut query = FilterQuery::new().with_text(self.med_query.clone());
        if self.med_chip > 0 {
            if let Some(category) = self.catalog.categories().get(self.med_chip - 1) {
                query = query.with_category(category.clone());
            }
        }
        query
    }

    /// The search tab's query: text, multi-select chips, coerced bounds.
    fn search_query_value(&self) -> FilterQuery {
        FilterQuery {
            text: self.search_query.clone(),
            categories: self.search_selected.clone(),
            price_range: PriceRange::new(
                parse_bound(&self.min_input, 0.0),
                parse_bound(&self.max_input, f64::MAX),
            ),
        }
    }

    fn handle_key(&mut self, code: KeyCode) {
        match self.tab {
            Tab::Symptoms => self.handle_symptoms_key(code),
            Tab::Medicines => self.handle_medicines_key(code),
            Tab::Search => self.handle_search_key(code),
            Tab::Beds | Tab::Profile => {}
        }
    }

    fn handle_symptoms_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Char(c) => self.symptom_text.push(c),
            KeyCode::Backspace => {
                self.symptom_text.pop();
            }
            KeyCode::Enter => self.start_analysis(),
            _ => {}
        }
    }

    fn handle_medicines_key(&mut self, code: KeyCode) {
        // Chip positions: 0 = "All", 1.. = derived categories.
        let chip_count = self.catalog.categories().len() + 1;
        match code {
            KeyCode::Char(c) => self.med_query.push(c),
            KeyCode::Backspace => {
                self.med_query.pop();
            }
            KeyCode::Right => self.med_chip = (self.med_chip + 1) % chip_count,
            KeyCode::Left => self.med_chip = (self.med_chip + chip_count - 1) % chip_count,
            _ => {}
        }
    }

    fn handle_search_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Down => {
                self.search_focus = self.search_focus.next();
                return;
            }
            KeyCode::Up => {
                self.search_focus = self.search_focus.prev();
                return;
            }
            _ => {}
        }

        match self.search_focus {
            SearchField::Query => match code {
                KeyCode::Char(c) => self.search_query.push(c),
                KeyCode::Backspace => {
                    self.search_query.pop();
                }
                _ => {}
            },
            SearchField::Categories => {
                let chip_count = self.catalog.categories().len();
                if chip_count == 0 {
                    return;
                }
                match code {
                    KeyCode::Right => {
                        self.search_chip_cursor = (self.search_chip_cursor + 1) % chip_count;
                    }
                    KeyCode::Left => {
                        self.search_chip_cursor =
                            (self.search_chip_cursor + chip_count - 1) % chip_count;
                    }
                    KeyCode::Enter | KeyCode::Char(' ') => {
                        if let Some(category) =
                            self.catalog.categories().get(self.search_chip_cursor)
                        {
                            let category = category.clone();
                            self.search_selected.toggle(&category);
                        }
                    }
                    _ => {}
                }
            }
            SearchField::Min => match code {
                KeyCode::Char(c) => self.min_input.push(c),
                KeyCode::Backspace => {
                    self.min_input.pop();
                }
                _ => {}
            },
            SearchField::Max => match code {
                KeyCode::Char(c) => self.max_input.push(c),
                KeyCode::Backspace => {
                    self.max_input.pop();
                }
                _ => {}
            },
        }
    }
}

// ── Rendering ─────────────────────────────────────────────────────────────────

fn ui(f: &mut Frame, app: &App) {
    let full = f.area();

    let outer_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // header
            Constraint::Min(10),   // body
            Constraint::Length(3), // footer
        ])
        .split(full);

    render_header(f, outer_chunks[0], app);

    match app.tab {
        Tab::Symptoms => render_symptoms(f, outer_chunks[1], app),
        Tab::Medicines => render_medicines(f, outer_chunks[1], app),
        Tab::Search => render_search(f, outer_chunks[1], app),
        Tab::Beds => render_beds(f, outer_chunks[1], app),
        Tab::Profile => render_profile(f, outer_chunks[1], app),
    }

    render_footer(f, outer_chunks[2], app);
}

fn render_header(f: &mut Frame, area: Rect, app: &App) {
    let title_style = Style::default()
        .fg(Color::Cyan)
        .add_modifier(Modifier::BOLD);

    let mut spans: Vec<Span> = vec![Span::styled(format!("{}    ", APP_NAME), title_style)];

    for tab in Tab::ALL {
        let style = if app.tab == tab {
            Style::default()
                .fg(Color::Black)
                .bg(Color::Cyan)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::White)
        };
        spans.push(Span::styled(format!(" {} ", tab.name()), style));
        spans.push(Span::raw(" "));
    }

    let header = Paragraph::new(Line::from(spans)).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray)),
    );
    f.render_widget(header, area);
}

fn render_symptoms(f: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(4), Constraint::Min(6)])
        .split(area);

    // Input box with a cursor marker.
    let input_line = Line::from(vec![
        Span::raw("  "),
        Span::raw(app.symptom_text.as_str()),
        Span::styled("█", Style::default().fg(Color::Cyan)),
    ]);
    let placeholder = Line::from(Span::styled(
        "  E.g., I have a headache and mild fever since yesterday...",
        Style::default().fg(Color::DarkGray),
    ));
    let shown = if app.symptom_text.is_empty() {
        vec![input_line, placeholder]
    } else {
        vec![input_line]
    };
    let input = Paragraph::new(shown).block(
        Block::default()
            .title(" Describe your symptoms ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray)),
    );
    f.render_widget(input, chunks[0]);

    // Result panel: spinner, error, analysis, or the feature grid.
    let mut lines: Vec<Line> = Vec::new();

    if app.pending.is_some() {
        let spinner = ["|", "/", "-", "\\"][app.spinner_frame % 4];
        lines.push(Line::from(Span::styled(
            format!("  {} Analyzing...", spinner),
            Style::default().fg(Color::Yellow),
        )));
    } else if let Some(error) = &app.analysis_error {
        lines.push(Line::from(Span::styled(
            format!("  {}", error),
            Style::default().fg(Color::Red),
        )));
    } else if let Some(analysis) = &app.analysis {
        lines.push(Line::from(Span::styled(
            "  Suggested Medicines",
            Style::default().add_modifier(Modifier::BOLD),
        )));
        for medicine in &analysis.suggested_medicines {
            lines.push(Line::from(vec![
                Span::styled(
                    format!("    {} ", medicine.name),
                    Style::default().fg(Color::Cyan),
                ),
                Span::raw(format!("— {}", medicine.dosage)),
            ]));
            if let Some(warning) = &medicine.warning {
                lines.push(Line::from(Span::styled(
                    format!("      {}", warning),
                    Style::default().fg(Color::Yellow),
                )));
            }
        }
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            "  Medical Advice",
            Style::default().add_modifier(Modifier::BOLD),
        )));
        lines.push(Line::from(format!("    {}", analysis.advice)));
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            format!("  {}", DISCLAIMER),
            Style::default().fg(Color::DarkGray),
        )));
    } else {
        lines.push(Line::from(Span::styled(
            format!("  Why Choose {}?", APP_NAME),
            Style::default().add_modifier(Modifier::BOLD),
        )));
        lines.push(Line::from(""));
        for feature in FEATURES {
            lines.push(Line::from(vec![
                Span::styled(
                    format!("  {}: ", feature.title),
                    Style::default().fg(Color::Cyan),
                ),
                Span::styled(feature.description, Style::default().fg(Color::Gray)),
            ]));
        }
    }

    let results = Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .block(
            Block::default()
                .title(format!(" {} ", APP_TAGLINE))
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::DarkGray)),
        );
    f.render_widget(results, chunks[1]);
}

fn render_medicines(f: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // search input
            Constraint::Length(3), // chips
            Constraint::Min(4),    // results
        ])
        .split(area);

    render_text_input(f, chunks[0], " Search medicines ", &app.med_query, true);

    // Single-select chip row: "All" plus the derived categories.
    let mut spans: Vec<Span> = vec![Span::raw("  ")];
    spans.push(chip_span("All", app.med_chip == 0, false));
    spans.push(Span::raw(" "));
    for (i, category) in app.catalog.categories().iter().enumerate() {
        spans.push(chip_span(category, app.med_chip == i + 1, false));
        spans.push(Span::raw(" "));
    }
    let chips = Paragraph::new(Line::from(spans)).block(
        Block::default()
            .title(" Categories ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray)),
    );
    f.render_widget(chips, chunks[1]);

    let query = app.medicines_query();
    render_results(f, chunks[2], app, &query);
}

fn render_search(f: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // query
            Constraint::Length(3), // chips
            Constraint::Length(3), // price bounds
            Constraint::Min(4),    // results
        ])
        .split(area);

    render_text_input(
        f,
        chunks[0],
        " Search medicines ",
        &app.search_query,
        app.search_focus == SearchField::Query,
    );

    // Multi-select chip row with a cursor when focused.
    let chips_focused = app.search_focus == SearchField::Categories;
    let mut spans: Vec<Span> = vec![Span::raw("  ")];
    for (i, category) in app.catalog.categories().iter().enumerate() {
        let selected = app.search_selected.contains(category);
        let under_cursor = chips_focused && app.search_chip_cursor == i;
        spans.push(chip_span(category, selected, under_cursor));
        spans.push(Span::raw(" "));
    }
    let chips_title = if chips_focused {
        " Categories (←/→ move, Enter toggles) "
    } else {
        " Categories "
    };
    let chips = Paragraph::new(Line::from(spans)).block(
        Block::default()
            .title(chips_title)
            .borders(Borders::ALL)
            .border_style(focus_border(chips_focused)),
    );
    f.render_widget(chips, chunks[1]);

    // Min / max side by side.
    let price_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(chunks[2]);
    render_text_input(
        f,
        price_chunks[0],
        " Min price ",
        &app.min_input,
        app.search_focus == SearchField::Min,
    );
    render_text_input(
        f,
        price_chunks[1],
        " Max price ",
        &app.max_input,
        app.search_focus == SearchField::Max,
    );

    let query = app.search_query_value();
    render_results(f, chunks[3], app, &query);
}

/// Shared result list for the medicines and search tabs: the ordered
/// sub-sequence the filter returns, rendered as cards.
fn render_results(f: &mut Frame, area: Rect, app: &App, query: &FilterQuery) {
    let results = app.catalog.filter(query);

    let mut items: Vec<ListItem> = Vec::new();
    if results.is_empty() {
        items.push(ListItem::new(Span::styled(
            "  No medicines match the current filters",
            Style::default().fg(Color::DarkGray),
        )));
    } else {
        for entry in &results {
            let line = Line::from(vec![
                Span::styled(
                    format!("  {:<14}", entry.name),
                    Style::default().add_modifier(Modifier::BOLD),
                ),
                Span::styled(format!("{:<10}", entry.brand), Style::default().fg(Color::Gray)),
                Span::styled(
                    format!("{:<14}", entry.category),
                    Style::default().fg(Color::Cyan),
                ),
                Span::styled(
                    format!("₹{:<7}", entry.price),
                    Style::default().fg(Color::Green),
                ),
                Span::styled(
                    truncate(&entry.description, 48),
                    Style::default().fg(Color::DarkGray),
                ),
            ]);
            items.push(ListItem::new(line));
        }
    }

    let title = format!(" Results ({} of {}) ", results.len(), app.catalog.len());
    let list = List::new(items).block(
        Block::default()
            .title(title)
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray)),
    );
    f.render_widget(list, area);
}

fn render_beds(f: &mut Frame, area: Rect, app: &App) {
    let mut items: Vec<ListItem> = Vec::new();

    for bed in &app.beds {
        let (status_color, icon) = if bed.status.is_available() {
            (Color::Green, "●")
        } else {
            (Color::Red, "●")
        };
        let line = Line::from(vec![
            Span::styled(format!("  {} ", icon), Style::default().fg(status_color)),
            Span::styled(
                format!("{:<8}", bed.name),
                Style::default().add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                format!("{:<12}", bed.status.label()),
                Style::default().fg(status_color),
            ),
            Span::styled(
                format!("checked {}", bed.checked_at.format("%H:%M UTC")),
                Style::default().fg(Color::DarkGray),
            ),
        ]);
        items.push(ListItem::new(line));
    }

    let summary = BedSummary::of(&app.beds);
    items.push(ListItem::new(""));
    items.push(ListItem::new(Span::styled(
        format!(
            "  {} of {} beds available ({} occupied)",
            summary.available,
            summary.total(),
            summary.occupied
        ),
        Style::default().add_modifier(Modifier::BOLD),
    )));

    let list = List::new(items).block(
        Block::default()
            .title(" Hospital Beds ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray)),
    );
    f.render_widget(list, area);
}

fn render_profile(f: &mut Frame, area: Rect, app: &App) {
    let mut lines: Vec<Line> = Vec::new();

    lines.push(Line::from(vec![
        Span::styled(
            format!("  ({}) ", app.profile.initials()),
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            app.profile.name.as_str(),
            Style::default().add_modifier(Modifier::BOLD),
        ),
    ]));
    lines.push(Line::from(Span::styled(
        format!("       {}", app.profile.email),
        Style::default().fg(Color::Gray),
    )));
    lines.push(Line::from(""));

    for item in ProfileMenuItem::ALL {
        lines.push(Line::from(vec![
            Span::styled(
                format!("  {:<16}", item.title()),
                Style::default().fg(Color::White),
            ),
            Span::styled(item.subtitle(), Style::default().fg(Color::DarkGray)),
        ]));
    }

    let paragraph = Paragraph::new(lines).block(
        Block::default()
            .title(" Profile ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray)),
    );
    f.render_widget(paragraph, area);
}

fn render_footer(f: &mut Frame, area: Rect, app: &App) {
    let mut spans: Vec<Span> = vec![
        Span::styled(" [Tab] ", Style::default().fg(Color::Cyan)),
        Span::raw("Switch tab  "),
    ];

    match app.tab {
        Tab::Symptoms => {
            spans.push(Span::styled("[Enter] ", Style::default().fg(Color::Cyan)));
            let label = if app.pending.is_some() {
                // Mirror the app's disabled button while loading.
                "Analyze (busy)  "
            } else if app.symptom_text.trim().is_empty() {
                "Analyze (enter symptoms first)  "
            } else {
                "Analyze  "
            };
            spans.push(Span::raw(label));
        }
        Tab::Medicines => {
            spans.push(Span::styled("[←/→] ", Style::default().fg(Color::Cyan)));
            spans.push(Span::raw("Category chip  "));
            spans.push(Span::raw("type to search  "));
        }
        Tab::Search => {
            spans.push(Span::styled("[↑/↓] ", Style::default().fg(Color::Cyan)));
            spans.push(Span::raw("Field  "));
            spans.push(Span::styled("[←/→] ", Style::default().fg(Color::Cyan)));
            spans.push(Span::raw("Chip  "));
            spans.push(Span::styled("[Enter] ", Style::default().fg(Color::Cyan)));
            spans.push(Span::raw("Toggle chip  "));
        }
        Tab::Beds | Tab::Profile => {}
    }

    spans.push(Span::styled("[Esc] ", Style::default().fg(Color::Cyan)));
    spans.push(Span::raw("Quit"));

    let footer = Paragraph::new(Line::from(spans)).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray)),
    );
    f.render_widget(footer, area);
}

// ── Widget helpers ────────────────────────────────────────────────────────────

/// One bordered text field with a cursor marker when focused.
fn render_text_input(f: &mut Frame, area: Rect, title: &str, value: &str, focused: bool) {
    let mut spans = vec![Span::raw("  "), Span::raw(value.to_string())];
    if focused {
        spans.push(Span::styled("█", Style::default().fg(Color::Cyan)));
    }
    let input = Paragraph::new(Line::from(spans)).block(
        Block::default()
            .title(title.to_string())
            .borders(Borders::ALL)
            .border_style(focus_border(focused)),
    );
    f.render_widget(input, area);
}

/// A category chip: highlighted when selected, underlined under the cursor.
fn chip_span(label: &str, selected: bool, under_cursor: bool) -> Span<'static> {
    let mut style = if selected {
        Style::default()
            .fg(Color::Black)
            .bg(Color::Cyan)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Gray)
    };
    if under_cursor {
        style = style.add_modifier(Modifier::UNDERLINED);
    }
    Span::styled(format!("[{}]", label), style)
}

fn focus_border(focused: bool) -> Style {
    if focused {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    }
}

/// Coerce one price-bound field the way the app's search screen does:
/// empty → `default` (open bound), unparsable → 0.
fn parse_bound(raw: &str, default: f64) -> f64 {
    if raw.trim().is_empty() {
        return default;
    }
    raw.trim().parse().unwrap_or(0.0)
}

/// Truncate a string to at most `max` chars, appending "…" if truncated.
fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        let cut: String = s.chars().take(max.saturating_sub(1)).collect();
        format!("{}…", cut)
    }
}

// ── Terminal setup / teardown ─────────────────────────────────────────────────

fn setup_terminal() -> io::Result<Terminal<CrosstermBackend<io::Stdout>>> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    Terminal::new(backend)
}

fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) -> io::Result<()> {
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()
}

// ── Main event loop ───────────────────────────────────────────────────────────

fn main() -> io::Result<()> {
    // Load the catalog before touching the terminal so a bad data file
    // fails with a readable message.
    let catalog = match mock_catalog() {
        Ok(catalog) => catalog,
        Err(e) => {
            eprintln!("failed to load catalog: {}", e);
            std::process::exit(1);
        }
    };

    // Install a panic hook that restores the terminal before printing the panic.
    let default_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        // Best-effort terminal restore on panic.
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        default_hook(info);
    }));

    let mut terminal = setup_terminal()?;
    let mut app = App::new(catalog);

    // Spinner tick interval while an analysis is in flight.
    const TICK_MS: u64 = 150;

    loop {
        app.poll_analysis();

        terminal.draw(|f| ui(f, &app))?;

        // Short ticks while the spinner is animating; otherwise a longer
        // timeout to avoid burning CPU.
        let timeout = if app.pending.is_some() {
            let elapsed = app.last_tick.elapsed();
            Duration::from_millis(TICK_MS).saturating_sub(elapsed)
        } else {
            Duration::from_millis(200)
        };

        if event::poll(timeout)? {
            if let Event::Key(key) = event::read()? {
                match key.code {
                    // Quit.
                    KeyCode::Esc => break,
                    KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => break,

                    // Tab bar.
                    KeyCode::Tab => app.tab = app.tab.next(),
                    KeyCode::BackTab => app.tab = app.tab.prev(),

                    code => app.handle_key(code),
                }
            }
        }

        if app.pending.is_some() && app.last_tick.elapsed() >= Duration::from_millis(TICK_MS) {
            app.tick_animation();
            app.last_tick = Instant::now();
        }
    }

    restore_terminal(&mut terminal)?;
    Ok(())
}
