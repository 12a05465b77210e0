use crate::config::Config;
use crate::library::logger::interface::Logger;
use crate::waste_app::core::{init, transition, Effect, Event, State};
use crate::waste_app::render::Render;
use crate::waste_app::run_effect::RunEffect;
use crate::waste_classifier::interface::WasteClassifier;
use std::sync::mpsc::{channel, Receiver};
use std::sync::Arc;
use std::time::Duration;

const WINDOW_TITLE: &str = "Waste Sorter";

pub struct WasteApp {
    state: State,
    config: Config,
    logger: Arc<dyn Logger + Send + Sync>,
    event_receiver: Receiver<Event>,
    run_effect: RunEffect,
    render: Render,
}

impl WasteApp {
    pub fn new(
        config: Config,
        logger: Arc<dyn Logger + Send + Sync>,
        waste_classifier: Arc<dyn WasteClassifier + Send + Sync>,
    ) -> Self {
        let (event_sender, event_receiver) = channel();
        let logger = logger.with_namespace("waste_app");
        let (state, _) = init();

        Self {
            state,
            render: Render::new(),
            run_effect: RunEffect::new(logger.clone(), waste_classifier, event_sender),
            event_receiver,
            logger,
            config,
        }
    }

    #[cfg(test)]
    pub fn state(&self) -> &State {
        &self.state
    }

    #[cfg(test)]
    pub fn run_effect(&self) -> &RunEffect {
        &self.run_effect
    }

    pub fn dispatch(&mut self, event: Event) -> Vec<Effect> {
        let old_state = std::mem::replace(&mut self.state, State::Empty);
        let old_name = old_state.name();
        let event_text = format!("{:?}", event);

        let (new_state, effects) = transition(&self.config, old_state, event);

        let _ = self.logger.info(&format!(
            "{} --{}--> {} effects: {:?}",
            old_name,
            event_text,
            new_state.name(),
            effects
        ));
        if let State::Failed { error, .. } = &new_state {
            let _ = self.logger.error(&format!("Classification failed: {:?}", error));
        }

        self.state = new_state;
        effects
    }

    fn dispatch_all(&mut self, ctx: &egui::Context, events: Vec<Event>) {
        for event in events {
            let effects = self.dispatch(event);
            self.run_effect.spawn_effects(effects, ctx);
        }
    }

    pub fn run(self) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let options = eframe::NativeOptions {
            viewport: egui::ViewportBuilder::default()
                .with_title(WINDOW_TITLE)
                .with_inner_size(self.config.window_size)
                .with_drag_and_drop(true),
            ..Default::default()
        };

        let _ = self.logger.info("Opening window");

        eframe::run_native(WINDOW_TITLE, options, Box::new(|_cc| Box::new(self)))
            .map_err(|e| e.to_string())?;

        Ok(())
    }
}

impl eframe::App for WasteApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let finished: Vec<Event> = self.event_receiver.try_iter().collect();
        self.dispatch_all(ctx, finished);

        let intents = self.render.show(ctx, &self.state);
        self.dispatch_all(ctx, intents);

        if matches!(self.state, State::Classifying { .. }) {
            ctx.request_repaint_after(Duration::from_millis(100));
        }
    }
}
