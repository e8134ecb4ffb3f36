use anyhow::{Context, Result};
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use pagetree_config::Config;
use pagetree_engine::{
    OutlineEntry, Page, RebuildOptions, SiteLayout, TagCatalog, io, outline, render,
};
use ratatui::{
    Frame, Terminal,
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
};
use std::{env, io::stdout, path::PathBuf, process};

const USAGE: &str = "Usage:
  pagetree-cli view <save-file>
  pagetree-cli export <save-file> [out-dir]
  pagetree-cli check <save-file>
  pagetree-cli new <save-file>";

struct App {
    page: Page,
    entries: Vec<OutlineEntry>,
    list_state: ListState,
    details: Vec<String>,
}

impl App {
    fn new(page: Page) -> Self {
        let entries = outline(&page.root);
        let mut app = Self {
            page,
            entries,
            list_state: ListState::default(),
            details: Vec::new(),
        };

        // There is always a root, so select it
        app.list_state.select(Some(0));
        app.update_details_for_selection();
        app
    }

    fn next_node(&mut self) {
        let i = match self.list_state.selected() {
            Some(i) => (i + 1) % self.entries.len(),
            None => 0,
        };
        self.list_state.select(Some(i));
        self.update_details_for_selection();
    }

    fn previous_node(&mut self) {
        let i = match self.list_state.selected() {
            Some(0) | None => self.entries.len() - 1,
            Some(i) => i - 1,
        };
        self.list_state.select(Some(i));
        self.update_details_for_selection();
    }

    fn update_details_for_selection(&mut self) {
        let Some(entry) = self
            .list_state
            .selected()
            .and_then(|index| self.entries.get(index))
        else {
            return;
        };
        let Some(node) = self.page.root.get(entry.node_index) else {
            self.details = vec![format!("Node {} not found", entry.node_index)];
            return;
        };

        let mut lines = vec![
            format!("Tag: {}", node.tag.name),
            format!("Closing tag: {}", if node.tag.closable { "yes" } else { "no" }),
            format!("Node index: {}", entry.node_index),
            match entry.parent_index {
                Some(parent) => format!("Parent index: {parent}"),
                None => "Parent index: -1 (root)".to_string(),
            },
            format!("Children: {}", entry.child_count),
        ];

        if !node.tag.legal_parents.is_empty() {
            lines.push(format!("Legal parents: {}", node.tag.legal_parents.join(", ")));
        }

        lines.push(String::new());
        lines.push("Attributes:".to_string());
        if node.tag.attributes.is_empty() {
            lines.push("  (none)".to_string());
        }
        for (name, value) in &node.tag.attributes {
            lines.push(format!("  {name} = \"{value}\""));
        }

        lines.push(String::new());
        lines.push("Markup:".to_string());
        lines.extend(render(node).lines().map(str::to_string));

        self.details = lines;
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    let args: Vec<String> = env::args().collect();
    if args.len() < 3 {
        eprintln!("{USAGE}");
        process::exit(1);
    }

    let config = match Config::load_or_default() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: Failed to load config file: {e}");
            process::exit(1);
        }
    };
    let options = RebuildOptions {
        verify_child_counts: config.verify_child_counts,
    };
    let save_path = PathBuf::from(&args[2]);

    match (args[1].as_str(), args.len()) {
        ("view", 3) => {
            let page = load(&save_path, options);
            run_viewer(page)
        }
        ("export", 3 | 4) => {
            let page = load(&save_path, options);
            let out_dir = args
                .get(3)
                .map(PathBuf::from)
                .unwrap_or_else(|| config.export_dir.clone());
            let layout = SiteLayout {
                index_file_name: config.index_file_name.clone(),
                css_file_name: config.css_file_name.clone(),
            };
            let site = io::export_site(&out_dir, &page, &layout)
                .with_context(|| format!("exporting to {}", out_dir.display()))?;
            println!("Exported {}", site.index_path.display());
            Ok(())
        }
        ("check", 3) => {
            let page = load(&save_path, options);
            let catalog = match &config.catalog_path {
                Some(path) => Some(
                    io::load_catalog(path)
                        .with_context(|| format!("loading tag catalog {}", path.display()))?,
                ),
                None => None,
            };
            println!("{}:", save_path.display());
            for line in check_report(&page, catalog.as_ref()) {
                println!("  {line}");
            }
            Ok(())
        }
        ("new", 3) => {
            if save_path.exists() {
                eprintln!("Error: '{}' already exists", save_path.display());
                process::exit(1);
            }
            io::save_page(&save_path, &Page::default_page())?;
            log::info!("Created {}", save_path.display());
            Ok(())
        }
        _ => {
            eprintln!("{USAGE}");
            process::exit(1);
        }
    }
}

/// Summary lines for `check`; the catalog, when configured, adds the tags it
/// does not define
fn check_report(page: &Page, catalog: Option<&TagCatalog>) -> Vec<String> {
    let mut lines = vec![format!(
        "{} nodes, depth {}, {} bytes of CSS",
        page.root.node_count(),
        page.root.depth(),
        page.css.len()
    )];

    if let Some(catalog) = catalog {
        let unknown = catalog.unknown_tags(&page.root);
        if unknown.is_empty() {
            lines.push(format!("all tags are in the catalog ({} defined)", catalog.len()));
        } else {
            let names: Vec<_> = unknown.into_iter().collect();
            lines.push(format!("tags missing from the catalog: {}", names.join(", ")));
        }
    }

    lines
}

fn load(path: &std::path::Path, options: RebuildOptions) -> Page {
    match io::load_page_with(path, options) {
        Ok(page) => page,
        Err(e) => {
            eprintln!("Error: {e}");
            process::exit(1);
        }
    }
}

fn run_viewer(page: Page) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(page);

    // Main loop
    let res = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        println!("{err:?}");
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<()>
where
    B::Error: Send + Sync + 'static,
{
    loop {
        terminal.draw(|f| ui(f, app))?;

        if let Event::Key(key) = event::read()? {
            match key.code {
                KeyCode::Char('q') => return Ok(()),
                KeyCode::Down | KeyCode::Char('j') => app.next_node(),
                KeyCode::Up | KeyCode::Char('k') => app.previous_node(),
                _ => {}
            }
        }
    }
}

fn ui(f: &mut Frame, app: &mut App) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .margin(1)
        .constraints([Constraint::Percentage(35), Constraint::Percentage(65)].as_ref())
        .split(f.area());

    // Outline panel
    let items: Vec<ListItem> = app
        .entries
        .iter()
        .map(|entry| {
            let indent = "  ".repeat(entry.depth);
            let label = match &entry.text {
                Some(text) => format!("{indent}\"{text}\""),
                None => format!("{indent}<{}>", entry.name),
            };
            ListItem::new(vec![Line::from(vec![Span::raw(label)])])
        })
        .collect();

    let tree_list = List::new(items)
        .block(Block::default().borders(Borders::ALL).title("Tag tree"))
        .highlight_style(Style::default().bg(Color::Yellow).fg(Color::Black));

    f.render_stateful_widget(tree_list, chunks[0], &mut app.list_state);

    // Details panel
    let details: Vec<Line> = app
        .details
        .iter()
        .map(|line| Line::from(vec![Span::raw(line.clone())]))
        .collect();

    let content = Paragraph::new(details)
        .block(Block::default().borders(Borders::ALL).title("Node"))
        .wrap(ratatui::widgets::Wrap { trim: false });

    f.render_widget(content, chunks[1]);

    // Instructions
    let help_text = Line::from(vec![
        Span::raw("q: Quit | "),
        Span::raw("↑/k: Previous | "),
        Span::raw("↓/j: Next"),
    ]);

    let help = Paragraph::new(vec![help_text]).block(Block::default());

    // Place help at bottom
    let bottom_chunk = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(3)].as_ref())
        .split(f.area());

    f.render_widget(help, bottom_chunk[1]);
}
