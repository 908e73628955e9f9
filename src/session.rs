//! Interactive menu loop.
//!
//! Menu choices are read as whitespace-separated tokens, so `1 4` runs two
//! options and a bad token is dropped on its own. Record fields are read one
//! line per answer. Malformed answers are reported and asked again; they never
//! end the session. End of input ends the session like choosing exit.

use std::collections::VecDeque;
use std::io::{self, BufRead, Write};
use tracing::debug;

use crate::config::ReportFormat;
use crate::console::{render_matches_json, Reporter};
use crate::domain::VehicleKind;
use crate::error::InputError;
use crate::store::DataStore;

const MENU: &str =
    "\n1.View Data  2.Add Route  3.Add Vehicle  4.Calculate Best Matches  5.Exit\nChoice: ";

/// Entries of the main menu.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MenuChoice {
    ViewData,
    AddRoute,
    AddVehicle,
    CalculateBestMatches,
    Exit,
}

impl MenuChoice {
    /// Maps a menu number to its entry.
    ///
    /// ```
    /// use route_matching::session::MenuChoice;
    ///
    /// assert_eq!(MenuChoice::from_number(4), Some(MenuChoice::CalculateBestMatches));
    /// assert_eq!(MenuChoice::from_number(6), None);
    /// ```
    pub fn from_number(n: u32) -> Option<Self> {
        match n {
            1 => Some(MenuChoice::ViewData),
            2 => Some(MenuChoice::AddRoute),
            3 => Some(MenuChoice::AddVehicle),
            4 => Some(MenuChoice::CalculateBestMatches),
            5 => Some(MenuChoice::Exit),
            _ => None,
        }
    }
}

/// A console session over any line-oriented input and any output.
pub struct Session<R, W> {
    input: R,
    output: W,
    store: DataStore,
    reporter: Reporter,
    format: ReportFormat,
    /// Menu tokens left over from the last line read.
    pending: VecDeque<String>,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(input: R, output: W, store: DataStore) -> Self {
        Self {
            input,
            output,
            store,
            reporter: Reporter::plain(),
            format: ReportFormat::Table,
            pending: VecDeque::new(),
        }
    }

    pub fn with_reporter(mut self, reporter: Reporter) -> Self {
        self.reporter = reporter;
        self
    }

    pub fn with_format(mut self, format: ReportFormat) -> Self {
        self.format = format;
        self
    }

    /// Consumes the session and returns its store.
    pub fn into_store(self) -> DataStore {
        self.store
    }

    /// Runs the menu until exit is chosen or input ends.
    ///
    /// # Examples
    ///
    /// ```
    /// use route_matching::session::Session;
    /// use route_matching::store::DataStore;
    ///
    /// let input = "4\n5\n".as_bytes();
    /// let mut output = Vec::new();
    /// let mut session = Session::new(input, &mut output, DataStore::with_sample_data());
    /// session.run().unwrap();
    /// drop(session);
    ///
    /// let text = String::from_utf8(output).unwrap();
    /// assert!(text.contains("Best Match: V001 (Van)"));
    /// assert!(text.ends_with("System terminated.\n"));
    /// ```
    pub fn run(&mut self) -> Result<(), InputError> {
        match self.run_loop() {
            Err(InputError::Closed) => {
                debug!("Input closed, ending session");
                writeln!(self.output, "\nSystem terminated.")?;
                Ok(())
            }
            other => other,
        }
    }

    fn run_loop(&mut self) -> Result<(), InputError> {
        loop {
            write!(self.output, "{MENU}")?;
            self.output.flush()?;

            let token = self.next_menu_token()?;
            let Ok(number) = token.parse::<u32>() else {
                writeln!(self.output, "Invalid input. Please enter a number (1-5).")?;
                continue;
            };
            let Some(choice) = MenuChoice::from_number(number) else {
                writeln!(self.output, "Invalid choice. Please try again.")?;
                continue;
            };

            debug!(?choice, "Menu selection");
            if matches!(choice, MenuChoice::AddRoute | MenuChoice::AddVehicle) {
                // Record fields are line based; the rest of the menu line is not an answer.
                self.pending.clear();
            }
            match choice {
                MenuChoice::ViewData => self.view_data()?,
                MenuChoice::AddRoute => self.add_route()?,
                MenuChoice::AddVehicle => self.add_vehicle()?,
                MenuChoice::CalculateBestMatches => self.calculate_best_matches()?,
                MenuChoice::Exit => {
                    writeln!(self.output, "System terminated.")?;
                    return Ok(());
                }
            }
        }
    }

    fn view_data(&mut self) -> Result<(), InputError> {
        let text = self
            .reporter
            .render_inventory(self.store.routes(), self.store.vehicles());
        self.output.write_all(text.as_bytes())?;
        Ok(())
    }

    fn add_route(&mut self) -> Result<(), InputError> {
        let id = self.prompt_text("ID: ")?;
        let distance = self.prompt_number("Distance (km): ")?;
        let cargo = self.prompt_number("Cargo (kg): ")?;
        let source = self.prompt_text("Source: ")?;
        let destination = self.prompt_text("Dest: ")?;

        self.store.add_route(id, distance, cargo, source, destination);
        writeln!(self.output, "Route added!")?;
        Ok(())
    }

    fn add_vehicle(&mut self) -> Result<(), InputError> {
        let kind = VehicleKind::from_label(&self.prompt_text("Type (Truck/Van): ")?);
        let id = self.prompt_text("ID: ")?;
        let capacity = self.prompt_number("Capacity (kg): ")?;
        let mileage = self.prompt_number("Mileage (km/L): ")?;
        let rate = self.prompt_number("Rate (/L fuel): ")?;

        self.store.add_vehicle(kind, id, capacity, mileage, rate);
        writeln!(self.output, "Vehicle added!")?;
        Ok(())
    }

    fn calculate_best_matches(&mut self) -> Result<(), InputError> {
        let results = self.store.run_matching_pass();
        let text = match self.format {
            ReportFormat::Table => self.reporter.render_matches(&results),
            ReportFormat::Json => {
                let mut json = render_matches_json(&results).map_err(io::Error::from)?;
                json.push('\n');
                json
            }
        };
        self.output.write_all(text.as_bytes())?;
        Ok(())
    }

    fn prompt_text(&mut self, prompt: &str) -> Result<String, InputError> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;
        Ok(self.read_line()?.trim().to_string())
    }

    /// Asks until the answer parses as a finite number.
    fn prompt_number(&mut self, prompt: &str) -> Result<f64, InputError> {
        loop {
            let answer = self.prompt_text(prompt)?;
            match parse_number(&answer) {
                Some(value) => return Ok(value),
                None => writeln!(self.output, "Invalid number '{answer}'. Please try again.")?,
            }
        }
    }

    fn next_menu_token(&mut self) -> Result<String, InputError> {
        loop {
            if let Some(token) = self.pending.pop_front() {
                return Ok(token);
            }
            let line = self.read_line()?;
            self.pending
                .extend(line.split_whitespace().map(str::to_string));
        }
    }

    fn read_line(&mut self) -> Result<String, InputError> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(InputError::Closed);
        }
        Ok(line)
    }
}

/// Parses a numeric field. Rejects NaN and infinities.
fn parse_number(text: &str) -> Option<f64> {
    text.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}
