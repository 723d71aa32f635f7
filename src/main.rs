use clap::Parser;
use dialoguer::{Input, Select};
use episode_viewer::{
    EpisodeViewer, HtmlRenderer, PageRenderer, SelectOption, SummaryPolicy, TVMAZE_BASE_URL,
    TerminalRenderer, TvMazeProvider, ViewerConfig, ViewerError, ViewerEvent,
    write_html_snapshot,
};
use log::LevelFilter;
use std::path::PathBuf;
use std::process;

/// Browse TV show episode listings from TVMaze
#[derive(Debug, Parser)]
#[command(name = "episode-viewer", version, about)]
struct Cli {
    /// Base URL of the TVMaze compatible API
    #[arg(long, env = "EPISODE_VIEWER_BASE_URL", default_value = TVMAZE_BASE_URL)]
    base_url: String,

    /// Write the rendered HTML page to this file after every action
    #[arg(long, value_name = "PATH")]
    html: Option<PathBuf>,

    /// Render episode summaries as delivered by the API, without sanitizing
    #[arg(long)]
    raw_summaries: bool,

    /// Increase log output (-v: warn, -vv: info, -vvv: debug, -vvvv: trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

impl Cli {
    fn config(&self) -> ViewerConfig {
        ViewerConfig {
            base_url: self.base_url.clone(),
            summary_policy: if self.raw_summaries {
                SummaryPolicy::Raw
            } else {
                SummaryPolicy::Sanitized
            },
        }
    }
}

/// Actions offered once a show is selected
const ACTIONS: [&str; 5] = [
    "Search episodes",
    "Select an episode",
    "Show all episodes",
    "Change show",
    "Quit",
];

/// Handles viewer events and prints progress to stdout
fn handle_viewer_event(event: ViewerEvent) {
    match event {
        ViewerEvent::FetchingShows => {
            println!("Loading shows, please wait...");
        }
        ViewerEvent::ShowsLoaded { count, from_cache } => {
            if !from_cache {
                println!("Found {} show(s)\n", count);
            }
        }
        ViewerEvent::FetchingEpisodes { .. } => {
            println!("Loading episodes, please wait...");
        }
        ViewerEvent::EpisodesLoaded { count, .. } => {
            println!("Found {} episode(s)\n", count);
        }
        ViewerEvent::FetchSettled | ViewerEvent::FetchFailed { .. } | ViewerEvent::Rendered { .. } => {}
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        // Fetch failures are shown on the page, so their warnings stay hidden
        0 => LevelFilter::Error,
        1 => LevelFilter::Warn,
        2 => LevelFilter::Info,
        3 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };

    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();
}

/// Terminal front end around a viewer session
struct App {
    viewer: EpisodeViewer<TvMazeProvider>,
    terminal: TerminalRenderer,
    html: HtmlRenderer,
    html_path: Option<PathBuf>,
}

impl App {
    /// Prints the display area and refreshes the HTML snapshot
    fn show_page(&self) {
        let page = self.viewer.page();
        print!("{}", self.terminal.render(&page));

        if let Some(path) = &self.html_path {
            if let Err(e) = write_html_snapshot(path, &page, &self.html) {
                eprintln!("Error writing {}: {}", path.display(), e);
            }
        }
    }

    /// Asks the user to pick one of `options`, returning its value
    fn choose(prompt: &str, options: &[SelectOption]) -> Result<Option<String>, dialoguer::Error> {
        let labels: Vec<&str> = options.iter().map(|o| o.label.as_str()).collect();
        let choice = Select::new()
            .with_prompt(prompt)
            .items(&labels)
            .default(0)
            .max_length(20)
            .interact_opt()?;
        Ok(choice.map(|index| options[index].value.clone()))
    }

    /// Reports a failed action; fetch failures are already on the page
    fn report(&self, result: Result<(), ViewerError>) {
        match result {
            Ok(()) | Err(ViewerError::Listing(_)) => self.show_page(),
            Err(e) => eprintln!("{}", e),
        }
    }

    fn choose_show(&mut self) -> Result<bool, dialoguer::Error> {
        let options = self.viewer.page().show_options.to_vec();
        if options.is_empty() {
            println!("No shows available.");
            return Ok(false);
        }

        match Self::choose("Select a show", &options)? {
            Some(value) => {
                let result = self.viewer.select_show(&value);
                self.report(result);
                Ok(true)
            }
            None => Ok(false),
        }
    }

    fn run(&mut self) -> Result<(), dialoguer::Error> {
        if !self.choose_show()? {
            return Ok(());
        }

        loop {
            let action = Select::new()
                .with_prompt("What next?")
                .items(&ACTIONS)
                .default(0)
                .interact_opt()?;

            match action {
                Some(0) => {
                    let term: String = Input::new()
                        .with_prompt("Search")
                        .allow_empty(true)
                        .interact_text()?;
                    let result = self.viewer.search(&term);
                    self.report(result);
                }
                Some(1) => {
                    let options = self.viewer.page().episode_options.to_vec();
                    if let Some(value) = Self::choose("Select an episode", &options)? {
                        let result = self.viewer.select_episode(&value);
                        self.report(result);
                    }
                }
                Some(2) => {
                    let result = self.viewer.select_episode("");
                    self.report(result);
                }
                Some(3) => {
                    self.choose_show()?;
                }
                _ => return Ok(()),
            }
        }
    }
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = cli.config();
    let mut viewer = EpisodeViewer::from_config(&config);
    viewer.set_event_handler(handle_viewer_event);

    let mut app = App {
        viewer,
        terminal: TerminalRenderer::new(config.summary_policy),
        html: HtmlRenderer::new(config.summary_policy),
        html_path: cli.html,
    };

    // The failure is already on the page as the red error line
    if app.viewer.load_shows().is_err() {
        app.show_page();
        process::exit(1);
    }

    if let Err(e) = app.run() {
        eprintln!("\nError: {}", e);
        process::exit(1);
    }
}
