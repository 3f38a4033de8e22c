//! Paste capture use case

use crate::application::store::NoteStore;
use crate::domain::ImagePayload;
use crate::error::Result;
use crate::infrastructure::{ClipboardItem, KeyValueStorage, PasteEvent};
use std::thread;

/// Captures images from paste events into a store.
///
/// Capture lasts as long as this value: it holds the store's mutable borrow,
/// and dropping it ends the session.
pub struct PasteCapture<'a, S: KeyValueStorage> {
    store: &'a mut NoteStore<S>,
}

impl<'a, S: KeyValueStorage> PasteCapture<'a, S> {
    /// Start capturing into `store`
    pub fn attach(store: &'a mut NoteStore<S>) -> Self {
        log::debug!("paste capture attached");
        PasteCapture { store }
    }

    /// Encode every image item of the event and append them in paste order.
    /// Non-image items are skipped. Returns the number of images captured.
    pub fn handle(&mut self, event: &PasteEvent) -> Result<usize> {
        let images: Vec<&ClipboardItem> = event
            .items
            .iter()
            .filter(|item| {
                if !item.is_image() {
                    log::debug!("skipping pasted item of type {}", item.mime_type);
                }
                item.is_image()
            })
            .collect();

        let payloads = encode_in_order(&images);
        let added = self.store.append_images(payloads)?;
        log::info!("captured {} of {} pasted items", added, event.items.len());
        Ok(added)
    }

    pub fn store(&self) -> &NoteStore<S> {
        self.store
    }
}

impl<S: KeyValueStorage> Drop for PasteCapture<'_, S> {
    fn drop(&mut self) {
        log::debug!("paste capture detached");
    }
}

/// Encode items concurrently; the result follows input order regardless of
/// which encoding finishes first. At most one worker per available core.
fn encode_in_order(items: &[&ClipboardItem]) -> Vec<ImagePayload> {
    let workers = thread::available_parallelism().map_or(1, |n| n.get());
    if items.len() < 2 || workers < 2 {
        return encode_chunk(items);
    }

    let chunk_size = items.len().div_ceil(workers);
    thread::scope(|scope| {
        let handles: Vec<_> = items
            .chunks(chunk_size)
            .map(|chunk| scope.spawn(move || encode_chunk(chunk)))
            .collect();

        handles
            .into_iter()
            .flat_map(|handle| {
                handle
                    .join()
                    .unwrap_or_else(|panic| std::panic::resume_unwind(panic))
            })
            .collect()
    })
}

fn encode_chunk(items: &[&ClipboardItem]) -> Vec<ImagePayload> {
    items
        .iter()
        .map(|item| ImagePayload::encode(&item.mime_type, &item.bytes))
        .collect()
}
