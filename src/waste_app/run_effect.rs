use crate::library::logger::interface::Logger;
use crate::waste_app::core::{Effect, Event};
use crate::waste_classifier::interface::WasteClassifier;
use std::sync::mpsc::Sender;
use std::sync::Arc;

#[derive(Clone)]
pub struct RunEffect {
    logger: Arc<dyn Logger + Send + Sync>,
    waste_classifier: Arc<dyn WasteClassifier + Send + Sync>,
    event_sender: Sender<Event>,
}

impl RunEffect {
    pub fn new(
        logger: Arc<dyn Logger + Send + Sync>,
        waste_classifier: Arc<dyn WasteClassifier + Send + Sync>,
        event_sender: Sender<Event>,
    ) -> Self {
        Self {
            logger,
            waste_classifier,
            event_sender,
        }
    }

    /// Blocks until the effect is done.
    pub fn run_effect(&self, effect: Effect) -> Event {
        let _ = self.logger.info(&format!("Running effect: {:?}", effect));

        match effect {
            Effect::ClassifyImage { image } => {
                Event::ClassifyDone(self.waste_classifier.classify(&image))
            }
        }
    }

    /// Runs each effect on its own thread and wakes the UI when the result is queued.
    pub fn spawn_effects(&self, effects: Vec<Effect>, ctx: &egui::Context) {
        for effect in effects {
            let runner = self.clone();
            let ctx = ctx.clone();
            std::thread::spawn(move || {
                let event = runner.run_effect(effect);
                if runner.event_sender.send(event).is_err() {
                    let _ = runner.logger.warn("Window closed before the effect finished");
                }
                ctx.request_repaint();
            });
        }
    }
}
