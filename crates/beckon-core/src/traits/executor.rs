use crate::catalog::CommandId;
use crate::errors::BeckonResult;
use crate::models::ExecuteOutcome;

/// The external command executor.
///
/// Its implementation (OS automation, shell invocation, ...) is out of
/// scope; the interpreter treats it as an opaque collaborator. The call may
/// block on OS-level work; no internal timeout is imposed and failures are
/// never retried.
pub trait ICommandExecutor: Send + Sync {
    fn execute(&self, command: CommandId, context: Option<&str>) -> BeckonResult<ExecuteOutcome>;
}
