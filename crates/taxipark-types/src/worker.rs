//! Worker pool. Runs synchronous tasks (password hashing) on dedicated
//! threads so they never block the async runtime.

use flume::{Receiver, Sender};
use futures::channel::oneshot;
use std::thread;

use crate::error::{Error, TpResult};
use tracing::error;

type Job = Box<dyn FnOnce() + Send>;

#[derive(Debug)]
pub struct WorkerPool {
	tx: Sender<Job>,
}

impl WorkerPool {
	pub fn new(threads: usize) -> Self {
		let (tx, rx) = flume::unbounded::<Job>();

		for _ in 0..threads.max(1) {
			let rx: Receiver<Job> = rx.clone();
			thread::spawn(move || {
				while let Ok(job) = rx.recv() {
					job();
				}
			});
		}

		Self { tx }
	}

	/// Submit a closure; returns a Future resolving to its result.
	pub fn run<F, T>(&self, f: F) -> impl std::future::Future<Output = TpResult<T>>
	where
		F: FnOnce() -> T + Send + 'static,
		T: Send + 'static,
	{
		let (res_tx, res_rx) = oneshot::channel();

		let job: Job = Box::new(move || {
			let result = f();
			let _ = res_tx.send(result);
		});

		if self.tx.send(job).is_err() {
			error!("Failed to send job to worker queue");
		}

		async move {
			res_rx.await.map_err(|_| {
				error!("Worker dropped result channel (task may have panicked)");
				Error::Internal("worker task failed".into())
			})
		}
	}
}


// vim: ts=4
