use super::DbPool;
use crate::errors::StorageError;
use cotacao_core::Deadline;
use diesel::SqliteConnection;
use log::debug;
use std::any::Any;
use tokio::sync::{mpsc, oneshot};

// A write job runs on the writer's connection and returns a type-erased value.
type Job<T> = Box<dyn FnOnce(&mut SqliteConnection) -> Result<T, StorageError> + Send + 'static>;
type Erased = Box<dyn Any + Send + 'static>;

struct Envelope {
    deadline: Deadline,
    job: Job<Erased>,
    reply: oneshot::Sender<Result<Erased, StorageError>>,
}

/// Handle for sending jobs to the writer actor.
#[derive(Clone)]
pub struct WriteHandle {
    tx: mpsc::Sender<Envelope>,
}

impl WriteHandle {
    /// Executes a database job on the writer actor's dedicated connection.
    ///
    /// The caller is released as soon as `deadline` elapses, whether the job
    /// is still queued or already running. The actor re-checks the same
    /// deadline after the job and rolls the transaction back if it expired,
    /// so a job that finishes after the deadline is rolled back. The commit
    /// itself is not bounded: one that starts just before expiry may still
    /// land after the caller was released.
    pub async fn exec<F, T>(&self, deadline: &Deadline, job: F) -> Result<T, StorageError>
    where
        F: FnOnce(&mut SqliteConnection) -> Result<T, StorageError> + Send + 'static,
        T: Send + 'static,
    {
        let (ret_tx, ret_rx) = oneshot::channel();
        let envelope = Envelope {
            deadline: *deadline,
            job: Box::new(move |c| job(c).map(|v| Box::new(v) as Erased)),
            reply: ret_tx,
        };

        let boxed = deadline
            .run(async {
                self.tx
                    .send(envelope)
                    .await
                    .map_err(|_| StorageError::WriterUnavailable)?;
                ret_rx.await.map_err(|_| StorageError::WriterUnavailable)?
            })
            .await??;

        boxed
            .downcast::<T>()
            .map(|value| *value)
            .map_err(|_| StorageError::SerializationError("unexpected writer result type".into()))
    }
}

/// Spawns the single writer to the database.
///
/// The actor owns one pooled connection on a blocking thread and runs every
/// job inside an immediate transaction, one at a time. Acquiring that
/// connection happens here, so an unusable database fails at startup rather
/// than on the first request.
pub fn spawn_writer(pool: &DbPool) -> Result<WriteHandle, StorageError> {
    let mut conn = pool.get()?;
    let (tx, mut rx) = mpsc::channel::<Envelope>(1024);

    tokio::task::spawn_blocking(move || {
        while let Some(Envelope {
            deadline,
            job,
            reply,
        }) = rx.blocking_recv()
        {
            if reply.is_closed() || deadline.is_expired() {
                debug!("Skipping write job whose deadline already elapsed");
                let _ = reply.send(Err(StorageError::DeadlineExceeded));
                continue;
            }

            let result = conn.immediate_transaction::<_, StorageError, _>(|c| {
                let value = job(c)?;
                deadline.check()?;
                Ok(value)
            });

            // The requester may have stopped waiting; nothing to do then.
            let _ = reply.send(result);
        }
        debug!("Writer actor stopped: all handles dropped");
    });

    Ok(WriteHandle { tx })
}
