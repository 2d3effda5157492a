//! Reading selected files into preview data URLs.
//!
//! Every file is read concurrently. Each one is handed back as soon as it
//! finishes, so completion order (not selection order) decides where it
//! lands in the selection.

use std::cell::RefCell;
use std::rc::Rc;

use futures::channel::oneshot;
use futures::stream::{FuturesUnordered, StreamExt};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{File, FileReader, ProgressEvent};

use crate::config::ACCEPTED_MIME_PREFIX;
use crate::services::browser::js_error_message;
use crate::types::{AppError, AppResult};

/// A user-provided file that may be an image.
#[allow(async_fn_in_trait)]
pub trait ImageBlob {
    /// MIME type as reported by the browser (may be empty).
    fn mime_type(&self) -> String;

    /// Original file name.
    fn file_name(&self) -> String;

    fn is_image(&self) -> bool {
        self.mime_type().starts_with(ACCEPTED_MIME_PREFIX)
    }

    /// Decode into a string the preview grid can display.
    async fn read_preview(&self) -> AppResult<String>;
}

impl ImageBlob for File {
    fn mime_type(&self) -> String {
        self.type_()
    }

    fn file_name(&self) -> String {
        self.name()
    }

    async fn read_preview(&self) -> AppResult<String> {
        let name = self.name();
        let decode_error = |message: String| AppError::Decode {
            name: name.clone(),
            message,
        };

        let reader = FileReader::new().map_err(|e| decode_error(js_error_message(&e)))?;
        let (tx, rx) = oneshot::channel::<Result<String, String>>();
        let tx = Rc::new(RefCell::new(Some(tx)));

        let onload = {
            let tx = Rc::clone(&tx);
            let reader = reader.clone();
            Closure::<dyn FnMut(ProgressEvent)>::new(move |_: ProgressEvent| {
                let result = reader
                    .result()
                    .ok()
                    .and_then(|value| value.as_string())
                    .ok_or_else(|| "reader produced no data URL".to_string());
                if let Some(tx) = tx.borrow_mut().take() {
                    let _ = tx.send(result);
                }
            })
        };
        let onerror = {
            let tx = Rc::clone(&tx);
            Closure::<dyn FnMut(ProgressEvent)>::new(move |_: ProgressEvent| {
                if let Some(tx) = tx.borrow_mut().take() {
                    let _ = tx.send(Err("the browser could not read the file".to_string()));
                }
            })
        };

        reader.set_onload(Some(onload.as_ref().unchecked_ref()));
        reader.set_onerror(Some(onerror.as_ref().unchecked_ref()));
        reader
            .read_as_data_url(self)
            .map_err(|e| decode_error(js_error_message(&e)))?;

        let outcome = rx.await;

        reader.set_onload(None);
        reader.set_onerror(None);
        drop(onload);
        drop(onerror);

        match outcome {
            Ok(Ok(data_url)) => Ok(data_url),
            Ok(Err(message)) => Err(decode_error(message)),
            Err(_) => Err(decode_error("read was cancelled".to_string())),
        }
    }
}

/// Split a batch into images and the number of rejected non-images.
pub fn partition_images<F: ImageBlob>(blobs: Vec<F>) -> (Vec<F>, usize) {
    let total = blobs.len();
    let images: Vec<F> = blobs.into_iter().filter(ImageBlob::is_image).collect();
    let rejected = total - images.len();
    (images, rejected)
}

/// Read all blobs concurrently, calling `on_decoded` once per blob in
/// completion order. A failed read never stops its siblings.
pub async fn decode_batch<F, S>(blobs: Vec<F>, mut on_decoded: S)
where
    F: ImageBlob,
    S: FnMut(F, AppResult<String>),
{
    let mut pending: FuturesUnordered<_> = blobs
        .into_iter()
        .map(|blob| async move {
            let result = blob.read_preview().await;
            (blob, result)
        })
        .collect();

    while let Some((blob, result)) = pending.next().await {
        on_decoded(blob, result);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::FakeBlob;
    use futures::executor::{block_on, LocalPool};
    use futures::task::LocalSpawnExt;

    #[test]
    fn test_partition_images() {
        let blobs = vec![
            FakeBlob::image("a.jpg"),
            FakeBlob::other("notes.txt", "text/plain"),
            FakeBlob::image("b.png"),
            FakeBlob::other("unknown", ""),
        ];
        let (images, rejected) = partition_images(blobs);
        assert_eq!(rejected, 2);
        let names: Vec<_> = images.iter().map(|b| b.file_name()).collect();
        assert_eq!(names, vec!["a.jpg", "b.png"]);
    }

    #[test]
    fn test_failed_read_does_not_block_siblings() {
        let blobs = vec![
            FakeBlob::image("a.jpg"),
            FakeBlob::broken("b.jpg"),
            FakeBlob::image("c.jpg"),
        ];
        let mut ok = Vec::new();
        let mut failed = Vec::new();
        block_on(decode_batch(blobs, |blob, result| match result {
            Ok(_) => ok.push(blob.file_name()),
            Err(_) => failed.push(blob.file_name()),
        }));
        assert_eq!(ok.len(), 2);
        assert_eq!(failed, vec!["b.jpg"]);
    }

    #[test]
    fn test_delivery_follows_completion_order() {
        let (a, tx_a) = FakeBlob::gated("a.jpg");
        let (b, tx_b) = FakeBlob::gated("b.jpg");
        let (c, tx_c) = FakeBlob::gated("c.jpg");

        let order = Rc::new(RefCell::new(Vec::new()));
        let mut pool = LocalPool::new();
        {
            let order = Rc::clone(&order);
            pool.spawner()
                .spawn_local(decode_batch(vec![a, b, c], move |blob, _| {
                    order.borrow_mut().push(blob.file_name())
                }))
                .unwrap();
        }

        pool.run_until_stalled();
        assert!(order.borrow().is_empty());

        tx_c.send(Ok("data:c".to_string())).unwrap();
        pool.run_until_stalled();
        tx_a.send(Ok("data:a".to_string())).unwrap();
        tx_b.send(Ok("data:b".to_string())).unwrap();
        pool.run_until_stalled();

        assert_eq!(order.borrow()[0], "c.jpg");
        assert_eq!(order.borrow().len(), 3);
    }
}
