//! Capture session: selection, crop, annotation, result

use std::mem;

use image::RgbaImage;

use super::shortcuts::{self, EditorCommand, Key};
use crate::annotations::{DrawEvent, Editor};
use crate::capture::CapturedImage;
use crate::config::CoreConfig;
use crate::domain::Rect;
use crate::selection::{SelectionController, SelectionEvent, SelectionGeometry, SelectionOutcome};
use crate::{Error, Result};

/// Where a session currently is
#[derive(Debug)]
pub enum Stage {
    Selecting(SelectionController),
    Editing(Editor),
    /// Flattened, annotated result
    Finished(RgbaImage),
    Cancelled,
}

/// Drives one screenshot from region selection to the annotated result
#[derive(Debug)]
pub struct CaptureSession {
    capture: CapturedImage,
    config: CoreConfig,
    stage: Stage,
}

impl CaptureSession {
    pub fn new(capture: CapturedImage, config: CoreConfig) -> Self {
        let stage = Stage::Selecting(Self::selector(&capture, &config));
        Self {
            capture,
            config,
            stage,
        }
    }

    fn selector(capture: &CapturedImage, config: &CoreConfig) -> SelectionController {
        SelectionController::from_config(capture.logical_size(), capture.scale_factor, config)
    }

    pub fn capture(&self) -> &CapturedImage {
        &self.capture
    }

    pub fn config(&self) -> &CoreConfig {
        &self.config
    }

    pub fn stage(&self) -> &Stage {
        &self.stage
    }

    pub fn editor(&self) -> Option<&Editor> {
        match &self.stage {
            Stage::Editing(editor) => Some(editor),
            _ => None,
        }
    }

    pub fn editor_mut(&mut self) -> Option<&mut Editor> {
        match &mut self.stage {
            Stage::Editing(editor) => Some(editor),
            _ => None,
        }
    }

    /// Selection feedback while selecting
    pub fn selection_geometry(&self) -> Option<SelectionGeometry> {
        match &self.stage {
            Stage::Selecting(controller) => Some(controller.geometry()),
            _ => None,
        }
    }

    /// The annotated image once the session has finished
    pub fn result(&self) -> Option<&RgbaImage> {
        match &self.stage {
            Stage::Finished(img) => Some(img),
            _ => None,
        }
    }

    pub fn is_cancelled(&self) -> bool {
        matches!(self.stage, Stage::Cancelled)
    }

    /// Feed a selection event; ignored outside the selecting stage
    ///
    /// A confirmed region that is empty after clipping returns
    /// [`Error::EmptyRegion`] and restarts selection from scratch.
    pub fn handle_selection_event(&mut self, event: SelectionEvent) -> Result<()> {
        let Stage::Selecting(controller) = &mut self.stage else {
            return Ok(());
        };

        match controller.handle_event(event) {
            Some(SelectionOutcome::Confirmed(rect)) => self.start_editing(rect),
            Some(SelectionOutcome::Cancelled) => {
                self.stage = Stage::Cancelled;
                Ok(())
            }
            None => Ok(()),
        }
    }

    fn start_editing(&mut self, rect: Rect) -> Result<()> {
        match self.capture.crop(rect) {
            Ok(cropped) => {
                log::debug!("Editing {}x{} region", cropped.width(), cropped.height());
                let editor = Editor::with_config(cropped, self.capture.scale_factor, &self.config);
                self.stage = Stage::Editing(editor);
                Ok(())
            }
            Err(err @ Error::EmptyRegion(_)) => {
                log::warn!("Empty selection, starting over: {err}");
                self.stage = Stage::Selecting(Self::selector(&self.capture, &self.config));
                Err(err)
            }
            Err(err) => Err(err),
        }
    }

    /// Feed a pointer event to the editor; returns true if the display changed
    pub fn handle_draw_event(&mut self, event: DrawEvent) -> bool {
        match &mut self.stage {
            Stage::Editing(editor) => editor.handle_event(event),
            _ => false,
        }
    }

    /// Route a key press to whichever stage is active
    pub fn handle_key(&mut self, key: Key) -> Result<()> {
        match self.stage {
            Stage::Selecting(_) => match shortcuts::map_key(key) {
                Some(k) => self.handle_selection_event(SelectionEvent::KeyPress(k)),
                None => Ok(()),
            },
            Stage::Editing(_) => {
                match shortcuts::map_editor_key(key) {
                    Some(EditorCommand::Finish) => {
                        self.finish();
                    }
                    Some(EditorCommand::Cancel) => self.cancel(),
                    Some(EditorCommand::SetTool(tool)) => {
                        if let Some(editor) = self.editor_mut() {
                            editor.set_tool(tool);
                        }
                    }
                    Some(EditorCommand::CycleTool) => {
                        if let Some(editor) = self.editor_mut() {
                            editor.cycle_tool();
                        }
                    }
                    None => {}
                }
                Ok(())
            }
            Stage::Finished(_) | Stage::Cancelled => Ok(()),
        }
    }

    /// Flatten the annotations and end the session
    ///
    /// Returns the result, or None if the session was not editing.
    pub fn finish(&mut self) -> Option<&RgbaImage> {
        if !matches!(self.stage, Stage::Editing(_)) {
            return self.result();
        }
        if let Stage::Editing(editor) = mem::replace(&mut self.stage, Stage::Cancelled) {
            let result = editor.into_final();
            log::debug!("Session finished: {}x{}", result.width(), result.height());
            self.stage = Stage::Finished(result);
        }
        self.result()
    }

    /// Abandon the session from any stage
    pub fn cancel(&mut self) {
        log::debug!("Session cancelled");
        self.stage = Stage::Cancelled;
    }

    /// Take the finished image out of the session
    pub fn into_result(self) -> Option<RgbaImage> {
        match self.stage {
            Stage::Finished(img) => Some(img),
            _ => None,
        }
    }
}
