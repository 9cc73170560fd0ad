//! Background board construction with channel-based completion
//!
//! Decoding and slicing a large picture can take a while, so it runs on a
//! worker thread. The UI thread polls [`BoardLoader::try_recv`] from its event
//! loop, or blocks on [`BoardLoader::wait`], and receives either a finished
//! board or the decode error. The board itself is then driven from one thread.

use std::sync::mpsc::{self, Receiver, TryRecvError};
use std::thread;

use tracing::{debug, warn};

use crate::board::BoardModel;
use crate::io::configuration::PuzzleConfig;
use crate::io::error::{PuzzleError, Result};
use crate::io::image::ImageSource;

/// Handle to a board being built in the background
#[derive(Debug)]
pub struct BoardLoader {
    receiver: Receiver<Result<BoardModel>>,
}

impl BoardLoader {
    /// Start decoding, slicing and shuffling `source` on a worker thread
    pub fn spawn<S>(source: S, config: PuzzleConfig) -> Self
    where
        S: ImageSource + Send + 'static,
    {
        let (sender, receiver) = mpsc::channel();
        thread::spawn(move || {
            let result = BoardModel::initialize(&source, &config);
            if let Err(err) = &result {
                warn!(%err, "Board loading failed");
            }
            if sender.send(result).is_err() {
                debug!("Board loader dropped before completion");
            }
        });
        Self { receiver }
    }

    /// Completed result, or `None` while the worker is still busy
    pub fn try_recv(&self) -> Option<Result<BoardModel>> {
        match self.receiver.try_recv() {
            Ok(result) => Some(result),
            Err(TryRecvError::Empty) => None,
            Err(TryRecvError::Disconnected) => Some(Err(PuzzleError::LoaderDisconnected)),
        }
    }

    /// Block until the worker finishes
    ///
    /// # Errors
    ///
    /// Returns the board construction error, or
    /// [`PuzzleError::LoaderDisconnected`] if the worker died without a result
    pub fn wait(self) -> Result<BoardModel> {
        match self.receiver.recv() {
            Ok(result) => result,
            Err(err) => {
                debug!(%err, "Board loader channel closed");
                Err(PuzzleError::LoaderDisconnected)
            }
        }
    }
}
