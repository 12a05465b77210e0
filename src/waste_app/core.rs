use crate::config::Config;
use crate::prediction::display_model::DisplayModel;
use crate::upload::{UploadError, UploadedImage};
use crate::waste_classifier::interface::{ClassificationResponse, ClassifyError};

/// The image the user is currently working with. Replaced wholesale on every upload.
#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    pub image: UploadedImage,
}

impl Session {
    pub fn new(image: UploadedImage) -> Self {
        Self { image }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum State {
    Empty,
    UploadRejected {
        error: UploadError,
    },
    Ready {
        session: Session,
    },
    Classifying {
        session: Session,
    },
    Classified {
        session: Session,
        display: DisplayModel,
    },
    Failed {
        session: Session,
        error: ClassifyError,
    },
}

impl State {
    pub fn session(&self) -> Option<&Session> {
        match self {
            State::Empty | State::UploadRejected { .. } => None,
            State::Ready { session }
            | State::Classifying { session }
            | State::Classified { session, .. }
            | State::Failed { session, .. } => Some(session),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            State::Empty => "Empty",
            State::UploadRejected { .. } => "UploadRejected",
            State::Ready { .. } => "Ready",
            State::Classifying { .. } => "Classifying",
            State::Classified { .. } => "Classified",
            State::Failed { .. } => "Failed",
        }
    }
}

#[derive(Debug)]
pub enum Event {
    ImageUploaded(UploadedImage),
    UploadFailed(UploadError),
    ClassifyClicked,
    ClassifyDone(Result<ClassificationResponse, ClassifyError>),
}

#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    ClassifyImage { image: UploadedImage },
}

pub fn init() -> (State, Vec<Effect>) {
    (State::Empty, vec![])
}

pub fn transition(config: &Config, state: State, event: Event) -> (State, Vec<Effect>) {
    match (state, event) {
        // One request at a time: the upload area is locked while classifying
        (
            state @ State::Classifying { .. },
            Event::ImageUploaded(_) | Event::UploadFailed(_) | Event::ClassifyClicked,
        ) => (state, vec![]),

        (_, Event::ImageUploaded(image)) => (
            State::Ready {
                session: Session::new(image),
            },
            vec![],
        ),
        (_, Event::UploadFailed(error)) => (State::UploadRejected { error }, vec![]),

        (
            State::Ready { session }
            | State::Classified { session, .. }
            | State::Failed { session, .. },
            Event::ClassifyClicked,
        ) => {
            let image = session.image.clone();
            (
                State::Classifying { session },
                vec![Effect::ClassifyImage { image }],
            )
        }

        (State::Classifying { session }, Event::ClassifyDone(result)) => {
            let built = result.and_then(|response| {
                DisplayModel::build(
                    &response,
                    &config.category_table,
                    &config.ranking_rules(),
                )
            });

            match built {
                Ok(display) => (State::Classified { session, display }, vec![]),
                Err(error) => (State::Failed { session, error }, vec![]),
            }
        }

        (state, _) => (state, vec![]),
    }
}
