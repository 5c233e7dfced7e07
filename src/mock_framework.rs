//! # Mock Framework
//!
//! Utilities for testing line sources without a running registry.
//!
//! Use [`create_mock_client`] to get a client and a receiver, then
//! [`expect_execute`] to inspect each request and choose its reply.

use tokio::sync::{mpsc, oneshot};

use crate::app_system::{RegistryClient, RegistryRequest};

/// Creates a client whose requests land on the returned receiver.
pub fn create_mock_client(buffer_size: usize) -> (RegistryClient, mpsc::Receiver<RegistryRequest>) {
    let (sender, receiver) = mpsc::channel(buffer_size);
    (RegistryClient::new(sender), receiver)
}

/// Waits for the next Execute request. `None` once every client is gone.
pub async fn expect_execute(
    receiver: &mut mpsc::Receiver<RegistryRequest>,
) -> Option<(String, oneshot::Sender<Vec<String>>)> {
    match receiver.recv().await {
        Some(RegistryRequest::Execute { line, respond_to }) => Some((line, respond_to)),
        None => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_mock_client() {
        let (client, mut receiver) = create_mock_client(10);

        let execute_task = tokio::spawn(async move { client.execute("print_owners".to_string()).await });

        let (line, responder) = expect_execute(&mut receiver).await.expect("Expected Execute request");
        assert_eq!(line, "print_owners");
        responder.send(vec!["canned".to_string()]).unwrap();

        let result = execute_task.await.unwrap().unwrap();
        assert_eq!(result, vec!["canned".to_string()]);
    }
}
