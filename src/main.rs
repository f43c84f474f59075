//! Birthdate Ritual entry point
//!
//! Web: binds the page's buttons and inputs to the ritual controller.
//! Native: runs the ritual interactively in the terminal.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_app {
    use std::cell::RefCell;
    use std::rc::{Rc, Weak};
    use wasm_bindgen::prelude::*;
    use web_sys::{Document, HtmlElement, HtmlInputElement, KeyboardEvent, MouseEvent};

    use birthdate_ritual::persistence::LocalStore;
    use birthdate_ritual::ritual::{
        Action, RitualError, STEPS, Screen, ScreenController, share_text,
    };
    use birthdate_ritual::settings::Settings;
    use birthdate_ritual::submit::{FetchSubmitter, SubmitOutcome};

    #[wasm_bindgen(inline_js = "
        export function share_ritual(text, url) {
            if (navigator.share) {
                navigator.share({ title: 'Birthdate Magic', text: text, url: url });
            } else {
                navigator.clipboard.writeText(text);
                alert('Ritual link copied to clipboard!');
            }
        }

        export function alert_user(message) {
            alert(message);
        }
    ")]
    extern "C" {
        fn share_ritual(text: &str, url: &str);
        fn alert_user(message: &str);
    }

    /// Page id of each screen's container
    fn screen_id(screen: Screen) -> &'static str {
        match screen {
            Screen::Landing => "landing",
            Screen::Steps => "steps",
            Screen::CollectNumber => "input-section",
            Screen::CollectInfo => "user-info",
            Screen::Animating => "loading",
            Screen::Reveal => "reveal",
        }
    }

    const ALL_SCREENS: [Screen; 6] = [
        Screen::Landing,
        Screen::Steps,
        Screen::CollectNumber,
        Screen::CollectInfo,
        Screen::Animating,
        Screen::Reveal,
    ];

    struct App {
        controller: ScreenController<LocalStore>,
        settings: Settings,
        last_time: f64,
        shown_screen: Option<Screen>,
    }

    impl App {
        fn new(weak: &Weak<RefCell<App>>) -> Self {
            let weak = weak.clone();
            let on_settled: Rc<dyn Fn(u64, SubmitOutcome)> = Rc::new(move |ritual_id, outcome| {
                if let Some(app) = weak.upgrade() {
                    let mut app = app.borrow_mut();
                    app.controller.record_submission(ritual_id, outcome);
                    app.render();
                }
            });

            let controller = ScreenController::new(
                LocalStore::new(),
                Box::new(FetchSubmitter::new("/", on_settled)),
            );
            let settings = Settings::load(controller.store());

            Self {
                controller,
                settings,
                last_time: 0.0,
                shown_screen: None,
            }
        }

        /// Run an action; input errors go to the user, anything else to the log
        fn dispatch(&mut self, action: Action) {
            match self.controller.dispatch(action) {
                Ok(()) => {}
                Err(e @ (RitualError::InvalidInput | RitualError::MissingName)) => {
                    alert_user(&e.to_string());
                }
                Err(e) => log::warn!("Ignored action: {}", e),
            }
            self.render();
        }

        fn toggle_sound(&mut self) {
            self.settings.toggle_sound();
            self.settings.save(self.controller.store_mut());
            if let Some(doc) = document() {
                set_text(&doc, "sound-icon", self.settings.sound_icon());
            }
        }

        /// Push controller state into the DOM
        fn render(&mut self) {
            let Some(doc) = document() else {
                return;
            };

            let screen = self.controller.screen();
            if self.shown_screen != Some(screen) {
                for s in ALL_SCREENS {
                    if let Some(el) = doc.get_element_by_id(screen_id(s)) {
                        let _ = el.class_list().toggle_with_force("active", s == screen);
                    }
                }
                self.celebrate(&doc, screen == Screen::Reveal);
                self.shown_screen = Some(screen);
            }

            match screen {
                Screen::Steps => self.render_step(&doc),
                Screen::Animating => self.render_progress(&doc),
                Screen::Reveal => self.render_reveal(&doc),
                _ => {}
            }
        }

        fn render_step(&self, doc: &Document) {
            if let Some(el) = doc.query_selector(".step-title").ok().flatten() {
                el.set_text_content(Some(&self.controller.step_title()));
            }
            set_text(doc, "step-instruction", self.controller.current_instruction());

            let current = self.controller.session().current_step;
            if let Ok(dots) = doc.query_selector_all(".dot") {
                for i in 0..dots.length().min(STEPS.len() as u32) {
                    if let Some(dot) = dots.get(i).and_then(|n| n.dyn_into::<HtmlElement>().ok()) {
                        let _ = dot.class_list().toggle_with_force("active", i as usize == current);
                    }
                }
            }
        }

        fn render_progress(&self, doc: &Document) {
            let Some(frame) = self.controller.progress() else {
                return;
            };
            if let Some(bar) = doc
                .query_selector(".progress-bar-fill")
                .ok()
                .flatten()
                .and_then(|el| el.dyn_into::<HtmlElement>().ok())
            {
                let _ = bar
                    .style()
                    .set_property("width", &format!("{}%", frame.progress));
            }
            set_text(doc, "loading-msg", frame.message);
        }

        fn render_reveal(&self, doc: &Document) {
            let Some(reveal) = self.controller.reveal() else {
                return;
            };
            set_text(doc, "revealed-date", &reveal.headline());
            set_text(doc, "personality-traits", &reveal.trait_text());
            // Cleared on a clouded reveal so an earlier reading doesn't linger
            set_text(doc, "lucky-number", &reveal.lucky_label());
            set_text(doc, "advice", reveal.advice_text().unwrap_or_default());
            if let Some(card) = doc.get_element_by_id("personality-section") {
                let _ = card.class_list().remove_1("hidden");
                let _ = card.class_list().add_1("visible");
            }
        }

        /// Celebration class lives only while the reveal is on screen
        fn celebrate(&self, doc: &Document, revealing: bool) {
            if let Some(body) = doc.body() {
                let on = revealing && self.settings.celebrate_reveal();
                let _ = body.class_list().toggle_with_force("ritual-complete", on);
            }
        }
    }

    fn document() -> Option<Document> {
        web_sys::window()?.document()
    }

    fn set_text(doc: &Document, id: &str, text: &str) {
        if let Some(el) = doc.get_element_by_id(id) {
            el.set_text_content(Some(text));
        }
    }

    fn input_value(doc: &Document, id: &str) -> String {
        doc.get_element_by_id(id)
            .and_then(|el| el.dyn_into::<HtmlInputElement>().ok())
            .map(|input| input.value())
            .unwrap_or_default()
    }

    fn on_click(doc: &Document, id: &str, mut handler: impl FnMut() + 'static) {
        if let Some(btn) = doc.get_element_by_id(id) {
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| handler());
            let _ = btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
            closure.forget();
        } else {
            log::warn!("Missing element #{}", id);
        }
    }

    pub fn run() {
        console_error_panic_hook::set_once();
        if let Err(e) = console_log::init_with_level(log::Level::Info) {
            web_sys::console::error_1(&format!("Logger init failed: {}", e).into());
        }

        log::info!("Birthdate Ritual starting...");

        let Some(doc) = document() else {
            log::error!("No document - nothing to bind");
            return;
        };

        let app = Rc::new_cyclic(|weak| RefCell::new(App::new(weak)));

        {
            let app = app.borrow();
            // Returning seekers get their name pre-filled
            let name = &app.controller.session().user_name;
            if let Some(input) = doc
                .get_element_by_id("user-name")
                .and_then(|el| el.dyn_into::<HtmlInputElement>().ok())
            {
                input.set_value(name);
            }
            set_text(&doc, "sound-icon", app.settings.sound_icon());
        }

        setup_handlers(&doc, app.clone());
        app.borrow_mut().render();

        log::info!("Birthdate Ritual ready");
    }

    fn setup_handlers(doc: &Document, app: Rc<RefCell<App>>) {
        {
            let app = app.clone();
            on_click(doc, "start-btn", move || app.borrow_mut().dispatch(Action::Start));
        }
        {
            let app = app.clone();
            on_click(doc, "next-step-btn", move || {
                app.borrow_mut().dispatch(Action::NextStep)
            });
        }
        {
            let app = app.clone();
            on_click(doc, "submit-btn", move || submit_number(&app));
        }
        {
            let app = app.clone();
            on_click(doc, "info-submit-btn", move || {
                let Some(doc) = document() else {
                    return;
                };
                let action = Action::SubmitInfo {
                    name: input_value(&doc, "user-name"),
                    email: input_value(&doc, "user-email"),
                };
                app.borrow_mut().dispatch(action);
                if app.borrow().controller.screen() == Screen::Animating {
                    app.borrow_mut().last_time = 0.0;
                    request_animation_frame(app.clone());
                }
            });
        }
        {
            let app = app.clone();
            on_click(doc, "restart-btn", move || {
                if let Some(input) = document()
                    .and_then(|d| d.get_element_by_id("final-result"))
                    .and_then(|el| el.dyn_into::<HtmlInputElement>().ok())
                {
                    input.set_value("");
                }
                app.borrow_mut().dispatch(Action::Restart);
            });
        }
        on_click(doc, "share-btn", move || {
            if let Some(href) = web_sys::window().and_then(|w| w.location().href().ok()) {
                share_ritual(&share_text(&href), &href);
            }
        });
        {
            let app = app.clone();
            on_click(doc, "sound-control", move || app.borrow_mut().toggle_sound());
        }

        // Enter submits the final number
        if let Some(input) = doc.get_element_by_id("final-result") {
            let app = app.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                if event.key() == "Enter" {
                    submit_number(&app);
                }
            });
            let _ = input.add_event_listener_with_callback("keypress", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn submit_number(app: &Rc<RefCell<App>>) {
        if let Some(doc) = document() {
            let raw = input_value(&doc, "final-result");
            app.borrow_mut().dispatch(Action::SubmitNumber(raw));
        }
    }

    fn request_animation_frame(app: Rc<RefCell<App>>) {
        let Some(window) = web_sys::window() else {
            return;
        };
        let closure = Closure::once(move |time: f64| {
            animation_frame(app, time);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    /// Drive the progress animation from the browser's frame clock until the
    /// controller leaves the animating screen
    fn animation_frame(app: Rc<RefCell<App>>, time: f64) {
        let animating = {
            let mut a = app.borrow_mut();
            let dt = if a.last_time > 0.0 { time - a.last_time } else { 0.0 };
            a.last_time = time;

            let frame = a.controller.advance(dt);
            a.render();
            frame.is_some() && a.controller.screen() == Screen::Animating
        };

        if animating {
            request_animation_frame(app);
        }
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    wasm_app::run();
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

#[cfg(not(target_arch = "wasm32"))]
mod terminal {
    use std::io::{self, BufRead, Write};
    use std::thread;
    use std::time::Duration;

    use birthdate_ritual::consts::ANIMATION_TICK_MS;
    use birthdate_ritual::persistence::PersistenceStore;
    use birthdate_ritual::ritual::{Action, RevealView, Screen, ScreenController};

    /// Prompt and read one trimmed line; `None` on end of input
    fn prompt(input: &mut impl BufRead, text: &str) -> io::Result<Option<String>> {
        print!("{}", text);
        io::stdout().flush()?;
        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    pub fn run<S: PersistenceStore>(ctl: &mut ScreenController<S>) -> io::Result<()> {
        let stdin = io::stdin();
        let mut input = stdin.lock();

        println!("\n✨ Birthdate Magic - The Mind Reading Ritual ✨\n");
        if let Some(record) = ctl.returning_record() {
            println!("Welcome back, seeker. Your last ritual ({}) was successful.", record.date);
        }

        loop {
            let action = match ctl.screen() {
                Screen::Landing => {
                    match prompt(&mut input, "Press Enter to begin the ritual... ")? {
                        Some(_) => Action::Start,
                        None => return Ok(()),
                    }
                }
                Screen::Steps => {
                    let text = format!(
                        "\n{}: {}\n  (Enter when done) ",
                        ctl.step_title(),
                        ctl.current_instruction()
                    );
                    match prompt(&mut input, &text)? {
                        Some(_) => Action::NextStep,
                        None => return Ok(()),
                    }
                }
                Screen::CollectNumber => {
                    match prompt(&mut input, "\nWhat number did you arrive at? ")? {
                        Some(raw) => Action::SubmitNumber(raw),
                        None => return Ok(()),
                    }
                }
                Screen::CollectInfo => {
                    let saved = ctl.session().user_name.clone();
                    let name_prompt = if saved.is_empty() {
                        "Your name: ".to_string()
                    } else {
                        format!("Your name [{}]: ", saved)
                    };
                    let Some(mut name) = prompt(&mut input, &name_prompt)? else {
                        return Ok(());
                    };
                    if name.is_empty() {
                        name = saved;
                    }
                    let Some(email) = prompt(&mut input, "Your email (optional): ")? else {
                        return Ok(());
                    };
                    Action::SubmitInfo { name, email }
                }
                Screen::Animating => {
                    animate(ctl)?;
                    continue;
                }
                Screen::Reveal => {
                    show_reveal(ctl.reveal());
                    match prompt(&mut input, "\nPerform the ritual again? [y/N] ")? {
                        Some(answer) if answer.eq_ignore_ascii_case("y") => Action::Restart,
                        _ => return Ok(()),
                    }
                }
            };

            if let Err(e) = ctl.dispatch(action) {
                println!("{}", e);
            }
        }
    }

    fn animate<S: PersistenceStore>(ctl: &mut ScreenController<S>) -> io::Result<()> {
        let mut out = io::stdout();
        println!();
        while let Some(frame) = ctl.tick() {
            write!(out, "\r[{:>5.1}%] {:<40}", frame.progress, frame.message)?;
            out.flush()?;
            if frame.finished {
                break;
            }
            thread::sleep(Duration::from_millis(u64::from(ANIMATION_TICK_MS)));
        }
        println!();
        Ok(())
    }

    fn show_reveal(reveal: Option<&RevealView>) {
        let Some(reveal) = reveal else {
            return;
        };
        println!("\n  {}\n", reveal.headline());
        println!("  {}", reveal.trait_text());
        if let RevealView::Revealed { profile, .. } = reveal {
            println!("\n  Lucky number: {}", profile.lucky_number);
            println!("  {}", profile.advice_text);
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use birthdate_ritual::persistence::{FileStore, MemoryStore, PersistenceStore};
    use birthdate_ritual::ritual::ScreenController;
    use birthdate_ritual::submit::LogSubmitter;

    env_logger::init();
    log::info!("Birthdate Ritual (native) starting...");

    let path = std::env::var("RITUAL_STORE").unwrap_or_else(|_| ".ritual-store.json".to_string());
    let store: Box<dyn PersistenceStore> = match FileStore::open(&path) {
        Ok(store) => {
            log::info!("Remembering rituals in {}", store.path().display());
            Box::new(store)
        }
        Err(e) => {
            log::warn!("Cannot open store {}: {} - results will not be remembered", path, e);
            Box::new(MemoryStore::new())
        }
    };

    let mut controller = ScreenController::new(store, Box::new(LogSubmitter));
    if let Err(e) = terminal::run(&mut controller) {
        log::error!("Terminal I/O failed: {}", e);
        std::process::exit(1);
    }
}
