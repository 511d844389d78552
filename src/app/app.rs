use super::event::AppEvent;
use super::mode::AppMode;
use super::render_state::RenderState;
use crate::engine::{split_names, to_multiline, Config, SplitOptions, UiConfig};
use crate::input::{self, clipboard, Clipboard, LoadError, LoadedText};
use crate::ui::command::{command_to_app_event, parse_command};
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use tracing::info;
use unicode_segmentation::UnicodeSegmentation;

pub const STATUS_COPIED: &str = "Copied to clipboard";
pub const STATUS_COPY_FAILED: &str = "Could not copy automatically";

pub struct App {
    pub mode: AppMode,
    pub input: String,
    pub output: Vec<String>,
    pub options: SplitOptions,
    pub ui: UiConfig,
    pub status: String,
    pub command_buffer: String,
    clipboard: Box<dyn Clipboard>,
}

impl App {
    pub fn new(config: Config, clipboard: Box<dyn Clipboard>) -> Self {
        Self {
            mode: AppMode::Editing,
            input: String::new(),
            output: Vec::new(),
            options: config.split,
            ui: config.ui,
            status: String::new(),
            command_buffer: String::new(),
            clipboard,
        }
    }

    pub fn mode(&self) -> AppMode {
        self.mode
    }

    pub fn count(&self) -> usize {
        self.output.len()
    }

    pub fn handle_event(&mut self, event: AppEvent) {
        match event {
            AppEvent::Split => self.run_split(self.ui.auto_copy),
            AppEvent::Copy => self.copy_output(),
            AppEvent::Clear => self.clear(),
            AppEvent::ToggleDedupe => {
                self.options.deduplicate = !self.options.deduplicate;
                self.refresh_after_toggle("Deduplicate", self.options.deduplicate);
            }
            AppEvent::ToggleTrim => {
                self.options.trim_whitespace = !self.options.trim_whitespace;
                self.refresh_after_toggle("Trim spaces", self.options.trim_whitespace);
            }
            AppEvent::LoadFile(path) => {
                let loaded = input::load_path(&path);
                self.load(loaded);
            }
            AppEvent::LoadClipboard => {
                let loaded = clipboard::load(self.clipboard.as_mut());
                self.load(loaded);
            }
            AppEvent::Paste(text) if self.mode == AppMode::Command => {
                // The command deck is one line: keep the first pasted line.
                let line = normalize_paste(&text);
                self.command_buffer.push_str(line.lines().next().unwrap_or(""));
            }
            AppEvent::Paste(text) => {
                self.input.push_str(&normalize_paste(&text));
                if self.ui.split_on_paste {
                    self.run_split(self.ui.auto_copy);
                }
            }
            AppEvent::Help => self.mode = AppMode::Help,
            AppEvent::Quit => self.mode = AppMode::Quit,
            AppEvent::InvalidCommand(command) => {
                self.status = format!("Unknown command: {command} (:h for help)");
            }
            AppEvent::None => {}
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }

        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        if ctrl && key.code == KeyCode::Char('c') {
            self.handle_event(AppEvent::Quit);
            return;
        }

        match self.mode {
            AppMode::Editing => self.handle_editing_key(key.code, ctrl),
            AppMode::Command => self.handle_command_key(key.code),
            AppMode::Help => self.mode = AppMode::Editing,
            AppMode::Quit => {}
        }
    }

    fn handle_editing_key(&mut self, code: KeyCode, ctrl: bool) {
        match (code, ctrl) {
            (KeyCode::Char('s'), true) => self.handle_event(AppEvent::Split),
            (KeyCode::Char('y'), true) => self.handle_event(AppEvent::Copy),
            (KeyCode::Char('l'), true) => self.handle_event(AppEvent::Clear),
            (KeyCode::Esc, _) => {
                self.command_buffer.clear();
                self.mode = AppMode::Command;
            }
            (KeyCode::Enter, _) => self.input.push('\n'),
            (KeyCode::Tab, _) => self.input.push('\t'),
            (KeyCode::Backspace, _) => pop_grapheme(&mut self.input),
            (KeyCode::Char(c), false) => self.input.push(c),
            _ => {}
        }
    }

    fn handle_command_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Esc => self.mode = AppMode::Editing,
            KeyCode::Enter => {
                let command = parse_command(&self.command_buffer);
                self.command_buffer.clear();
                self.mode = AppMode::Editing;
                self.handle_event(command_to_app_event(command));
            }
            KeyCode::Backspace => {
                if self.command_buffer.is_empty() {
                    self.mode = AppMode::Editing;
                } else {
                    pop_grapheme(&mut self.command_buffer);
                }
            }
            KeyCode::Char(c) => self.command_buffer.push(c),
            _ => {}
        }
    }

    pub fn get_render_state(&self) -> RenderState {
        RenderState {
            mode: self.mode,
            input: self.input.clone(),
            names: self.output.clone(),
            options: self.options,
            auto_copy: self.ui.auto_copy,
            status: self.status.clone(),
            command_buffer: self.command_buffer.clone(),
        }
    }

    fn run_split(&mut self, auto_copy: bool) {
        self.output = split_names(&self.input, &self.options);
        info!(count = self.output.len(), "split input");

        if auto_copy && !self.output.is_empty() {
            self.copy_output();
        } else {
            self.status = "Done".to_string();
        }
    }

    fn copy_output(&mut self) {
        let text = to_multiline(&self.output);
        let copied = self.clipboard.write_text(&text);
        self.status = if copied { STATUS_COPIED } else { STATUS_COPY_FAILED }.to_string();
    }

    fn clear(&mut self) {
        self.input.clear();
        self.output.clear();
        self.status = "Cleared".to_string();
    }

    fn refresh_after_toggle(&mut self, label: &str, enabled: bool) {
        if !self.output.is_empty() {
            self.output = split_names(&self.input, &self.options);
        }
        self.status = format!("{label}: {}", if enabled { "on" } else { "off" });
    }

    fn load(&mut self, loaded: Result<LoadedText, LoadError>) {
        match loaded {
            Ok(LoadedText { text, source }) => {
                info!(%source, "loaded input");
                self.input = text;
                self.run_split(self.ui.auto_copy);
            }
            Err(err) => self.status = format!("Error: {err}"),
        }
    }
}

/// Terminals deliver pasted line breaks as `\r` or `\r\n`.
fn normalize_paste(text: &str) -> String {
    text.replace("\r\n", "\n").replace('\r', "\n")
}

fn pop_grapheme(buffer: &mut String) {
    if let Some((idx, _)) = buffer.grapheme_indices(true).next_back() {
        buffer.truncate(idx);
    }
}
