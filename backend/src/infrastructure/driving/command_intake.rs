use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use shared::protocol::IdentityEvent;
use std::sync::Arc;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};

use crate::application::commands::{DeleteApplicationPermissionCommand, DeleteApplicationPermissionHandler};
use crate::application::ports::ApplicationPermissionRepository;
use crate::application::queries::{get_application_permission, list_application_permissions};
use crate::domain::entities::{ApplicationPermission, PermissionKey};
use crate::domain::error::IdentityError;
use crate::domain::value_objects::ApplicationIdentifier;

/// One input line: a query, or else a delete command
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum IntakeRequest {
    List { list: String },
    Get { get: PermissionLookup },
    Delete(DeleteApplicationPermissionCommand),
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
struct PermissionLookup {
    application_identifier: String,
    permittable_group_identifier: String,
}

/// One response line per request read
#[derive(Debug, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum IntakeResponse {
    Accepted { event: IdentityEvent },
    Listed { permissions: Vec<ApplicationPermission> },
    Found { permission: ApplicationPermission },
    Rejected { error: String, kind: &'static str },
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct IntakeSummary {
    pub accepted: usize,
    pub answered: usize,
    pub rejected: usize,
}

/// Reads newline-delimited JSON requests and feeds them to the handler or the queries
pub struct CommandIntake {
    handler: Arc<DeleteApplicationPermissionHandler>,
    permission_repo: Arc<dyn ApplicationPermissionRepository>,
}

impl CommandIntake {
    pub fn new(
        handler: Arc<DeleteApplicationPermissionHandler>,
        permission_repo: Arc<dyn ApplicationPermissionRepository>,
    ) -> Self {
        Self {
            handler,
            permission_repo,
        }
    }

    pub async fn run<R, W>(&self, mut reader: R, mut writer: W) -> Result<IntakeSummary>
    where
        R: AsyncBufRead + Unpin,
        W: AsyncWrite + Unpin,
    {
        let mut summary = IntakeSummary::default();
        let mut line = Vec::new();

        loop {
            line.clear();
            // Raw bytes: a line that is not UTF-8 is rejected on its own
            let read = reader
                .read_until(b'\n', &mut line)
                .await
                .context("Failed to read command")?;
            if read == 0 {
                break;
            }
            if line.iter().all(|b| b.is_ascii_whitespace()) {
                continue;
            }

            let response = self.process(&line).await;
            match response {
                IntakeResponse::Accepted { .. } => summary.accepted += 1,
                IntakeResponse::Listed { .. } | IntakeResponse::Found { .. } => summary.answered += 1,
                IntakeResponse::Rejected { .. } => summary.rejected += 1,
            }

            let mut out = serde_json::to_string(&response).context("Failed to encode response")?;
            out.push('\n');
            writer.write_all(out.as_bytes()).await.context("Failed to write response")?;
            writer.flush().await?;
        }

        tracing::info!(
            "Command intake finished: {} accepted, {} answered, {} rejected",
            summary.accepted,
            summary.answered,
            summary.rejected
        );
        Ok(summary)
    }

    async fn process(&self, line: &[u8]) -> IntakeResponse {
        let request: IntakeRequest = match serde_json::from_slice(line) {
            Ok(request) => request,
            Err(e) => {
                tracing::warn!("Undecodable command: {}", e);
                return IntakeResponse::Rejected {
                    error: e.to_string(),
                    kind: "decode",
                };
            }
        };

        match self.dispatch(request).await {
            Ok(response) => response,
            Err(e) => IntakeResponse::Rejected {
                error: e.to_string(),
                kind: e.kind(),
            },
        }
    }

    async fn dispatch(&self, request: IntakeRequest) -> Result<IntakeResponse, IdentityError> {
        match request {
            IntakeRequest::Delete(command) => {
                let event = self.handler.handle(&command).await?;
                Ok(IntakeResponse::Accepted {
                    event: event.to_message(),
                })
            }
            IntakeRequest::List { list } => {
                let application_identifier = ApplicationIdentifier::new(list)?;
                let permissions =
                    list_application_permissions::execute(&*self.permission_repo, &application_identifier).await?;
                Ok(IntakeResponse::Listed { permissions })
            }
            IntakeRequest::Get { get } => {
                let key = PermissionKey::parse(get.application_identifier, get.permittable_group_identifier)?;
                let permission = get_application_permission::execute(&*self.permission_repo, &key).await?;
                Ok(IntakeResponse::Found { permission })
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::AllowedOperation;
    use crate::infrastructure::driven::{BroadcastEventPublisher, InMemoryApplicationPermissionRepository};
    use serde_json::Value;
    use tokio::io::BufReader;

    async fn intake_with(grants: &[(&str, &str)]) -> (CommandIntake, InMemoryApplicationPermissionRepository) {
        let repo = InMemoryApplicationPermissionRepository::new();
        for (app, group) in grants {
            let key = PermissionKey::parse(*app, *group).unwrap();
            repo.save(&ApplicationPermission::grant(key, [AllowedOperation::Read].into_iter().collect()))
                .await
                .unwrap();
        }
        let handler = DeleteApplicationPermissionHandler::new(
            Arc::new(repo.clone()),
            Arc::new(BroadcastEventPublisher::new(8)),
        );
        (CommandIntake::new(Arc::new(handler), Arc::new(repo.clone())), repo)
    }

    fn responses(output: &[u8]) -> Vec<Value> {
        std::str::from_utf8(output)
            .unwrap()
            .lines()
            .map(|l| serde_json::from_str(l).unwrap())
            .collect()
    }

    fn kinds(output: &[u8]) -> Vec<String> {
        responses(output)
            .iter()
            .map(|r| r.get("kind").and_then(Value::as_str).unwrap_or("-").to_string())
            .collect()
    }

    #[tokio::test]
    async fn test_accepts_and_reports_event() {
        let (intake, repo) = intake_with(&[("office", "customer")]).await;
        let input = br#"{"applicationIdentifier":"office","permittableGroupIdentifier":"customer"}
"#;
        let mut output = Vec::new();

        let summary = intake.run(BufReader::new(&input[..]), &mut output).await.unwrap();

        assert_eq!(summary, IntakeSummary { accepted: 1, answered: 0, rejected: 0 });
        assert_eq!(repo.len().await, 0);
        assert_eq!(
            responses(&output),
            vec![serde_json::json!({
                "status": "accepted",
                "event": {
                    "type": "delete-application-permission",
                    "applicationIdentifier": "office",
                    "permittableGroupIdentifier": "customer",
                }
            })]
        );
    }

    #[tokio::test]
    async fn test_rejections_do_not_stop_the_loop() {
        let (intake, repo) = intake_with(&[("office", "customer")]).await;
        let input = concat!(
            "not json\n",
            "\n",
            "{\"applicationIdentifier\":\"office\"}\n",
            "{\"applicationIdentifier\":\"office\",\"permittableGroupIdentifier\":\"loans\"}\n",
            "{\"applicationIdentifier\":\"office\",\"permittableGroupIdentifier\":\"customer\"}\n",
        );
        let mut output = Vec::new();

        let summary = intake
            .run(BufReader::new(input.as_bytes()), &mut output)
            .await
            .unwrap();

        assert_eq!(summary, IntakeSummary { accepted: 1, answered: 0, rejected: 3 });
        assert_eq!(repo.len().await, 0);
        assert_eq!(kinds(&output), vec!["decode", "validation", "not_found", "-"]);
    }

    #[tokio::test]
    async fn test_invalid_utf8_line_is_rejected_and_loop_continues() {
        let (intake, repo) = intake_with(&[("office", "customer")]).await;
        let mut input = b"{\"applicationIdentifier\":\"of\xff\"}\n".to_vec();
        input.extend_from_slice(
            b"{\"applicationIdentifier\":\"office\",\"permittableGroupIdentifier\":\"customer\"}\n",
        );
        let mut output = Vec::new();

        let summary = intake.run(BufReader::new(&input[..]), &mut output).await.unwrap();

        assert_eq!(summary, IntakeSummary { accepted: 1, answered: 0, rejected: 1 });
        assert_eq!(kinds(&output), vec!["decode", "-"]);
        assert_eq!(repo.len().await, 0);
    }

    #[tokio::test]
    async fn test_last_line_without_newline_is_processed() {
        let (intake, repo) = intake_with(&[("office", "customer")]).await;
        let input = br#"{"applicationIdentifier":"office","permittableGroupIdentifier":"customer"}"#;
        let mut output = Vec::new();

        let summary = intake.run(BufReader::new(&input[..]), &mut output).await.unwrap();

        assert_eq!(summary.accepted, 1);
        assert_eq!(repo.len().await, 0);
    }

    #[tokio::test]
    async fn test_list_and_get_queries() {
        let (intake, repo) = intake_with(&[("office", "loans"), ("office", "customer"), ("teller", "deposit")]).await;
        let input = concat!(
            "{\"list\":\"office\"}\n",
            "{\"get\":{\"applicationIdentifier\":\"teller\",\"permittableGroupIdentifier\":\"deposit\"}}\n",
            "{\"get\":{\"applicationIdentifier\":\"teller\",\"permittableGroupIdentifier\":\"loans\"}}\n",
            "{\"list\":\"office/x\"}\n",
        );
        let mut output = Vec::new();

        let summary = intake
            .run(BufReader::new(input.as_bytes()), &mut output)
            .await
            .unwrap();

        assert_eq!(summary, IntakeSummary { accepted: 0, answered: 2, rejected: 2 });
        assert_eq!(repo.len().await, 3);

        let responses = responses(&output);
        assert_eq!(responses[0]["status"], "listed");
        let groups: Vec<_> = responses[0]["permissions"]
            .as_array()
            .unwrap()
            .iter()
            .map(|p| p["key"]["permittableGroupIdentifier"].as_str().unwrap().to_string())
            .collect();
        assert_eq!(groups, vec!["customer", "loans"]);

        assert_eq!(responses[1]["status"], "found");
        assert_eq!(responses[1]["permission"]["key"]["applicationIdentifier"], "teller");
        assert_eq!(responses[1]["permission"]["allowedOperations"], serde_json::json!(["READ"]));

        assert_eq!(kinds(&output), vec!["-", "-", "not_found", "validation"]);
    }

    #[tokio::test]
    async fn test_empty_input() {
        let (intake, _) = intake_with(&[]).await;
        let mut output = Vec::new();

        let summary = intake.run(BufReader::new(&b""[..]), &mut output).await.unwrap();

        assert_eq!(summary, IntakeSummary::default());
        assert!(output.is_empty());
    }
}
