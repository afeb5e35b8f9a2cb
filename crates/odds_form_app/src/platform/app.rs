use std::io::{self, Write};
use std::sync::mpsc::RecvTimeoutError;
use std::time::Duration;

use anyhow::Context;
use odds_client::ClientSettings;
use odds_form_core::{update, validate_url_input, Effect, FormState, Msg};
use odds_logging::{odds_debug, odds_info};

use super::effects::EffectRunner;
use super::input::{self, UiEvent};
use super::logging::{self, LogDestination};
use super::ui;

const POLL_INTERVAL: Duration = Duration::from_millis(25);
const BUSY_NOTICE: &str = "処理中のため送信できません。";

pub fn run_app() -> anyhow::Result<()> {
    logging::initialize(LogDestination::from_env());

    let settings = ClientSettings::from_env().context("reading backend configuration")?;
    odds_info!("odds form starting; endpoint {}", settings.endpoint());
    let runner = EffectRunner::new(&settings).context("starting submission client")?;
    let ui_events = input::spawn_stdin_reader().context("starting stdin reader")?;

    let mut form = FormApp::new();
    let mut out = io::stdout().lock();
    write_frame(&mut out, &mut form)?;

    loop {
        match ui_events.recv_timeout(POLL_INTERVAL) {
            Ok(UiEvent::Line(text)) => {
                let (effects, notice) = form.on_line(text);
                if let Some(notice) = notice {
                    writeln!(out, "{notice}")?;
                }
                runner.enqueue(effects);
            }
            Ok(UiEvent::Closed) | Err(RecvTimeoutError::Disconnected) => form.close_input(),
            Err(RecvTimeoutError::Timeout) => {}
        }

        while let Some(msg) = runner.poll(Duration::ZERO) {
            let effects = form.dispatch(msg);
            runner.enqueue(effects);
        }

        if form.is_dirty() {
            write_frame(&mut out, &mut form)?;
        }
        if form.should_exit() {
            odds_info!("input closed and nothing in flight; exiting");
            return Ok(());
        }
        if form.input_closed {
            // Nothing more can arrive on stdin; block on the client instead.
            if let Some(msg) = runner.poll(POLL_INTERVAL) {
                let effects = form.dispatch(msg);
                runner.enqueue(effects);
            }
        }
    }
}

fn write_frame(out: &mut impl Write, form: &mut FormApp) -> io::Result<()> {
    form.state.consume_dirty();
    for line in ui::render::render(&form.state.view()) {
        writeln!(out, "{line}")?;
    }
    if !form.input_closed {
        write!(out, "{}", ui::constants::PROMPT)?;
    }
    out.flush()
}

/// Single-threaded owner of the form state.
struct FormApp {
    state: FormState,
    input_closed: bool,
}

impl FormApp {
    fn new() -> Self {
        Self {
            state: FormState::new(),
            input_closed: false,
        }
    }

    fn dispatch(&mut self, msg: Msg) -> Vec<Effect> {
        odds_debug!("dispatch {:?}", msg);
        let state = std::mem::take(&mut self.state);
        let (state, effects) = update(state, msg);
        self.state = state;
        effects
    }

    /// Applies one typed line: set the input, then press submit if the
    /// control is enabled and the input passes URL validation.
    fn on_line(&mut self, text: String) -> (Vec<Effect>, Option<String>) {
        let mut effects = self.dispatch(Msg::InputChanged(text));
        let view = self.state.view();
        if !view.submit_enabled {
            let notice = view.in_flight.then(|| BUSY_NOTICE.to_string());
            return (effects, notice);
        }
        if let Err(err) = validate_url_input(&view.input) {
            return (effects, Some(err.to_string()));
        }
        effects.extend(self.dispatch(Msg::SubmitClicked));
        (effects, None)
    }

    fn close_input(&mut self) {
        self.input_closed = true;
    }

    fn is_dirty(&self) -> bool {
        self.state.view().dirty
    }

    fn should_exit(&self) -> bool {
        self.input_closed && !self.state.in_flight()
    }
}
