use crate::error::Error;
use crate::gateway::Gateway;
use crate::request::RequestConfig;
use crate::types::{CreateScheduleParams, CreateTaskParams, Schedule, ScheduleTask, UpdateScheduleParams, UpdateTaskParams};

/// Cron schedules and their tasks. Updates are POSTs on this API.
#[derive(Debug, Clone)]
pub struct Schedules {
    gateway: Gateway,
    path: String,
}

impl Schedules {
    pub(crate) fn new(gateway: Gateway, server_path: &str) -> Self {
        Self {
            gateway,
            path: format!("{server_path}/schedules"),
        }
    }

    pub fn list(&self) -> Result<Vec<Schedule>, Error> {
        self.gateway.list(RequestConfig::get(self.path.as_str()))
    }

    pub fn get(&self, schedule_id: u64) -> Result<Schedule, Error> {
        self.gateway
            .single(RequestConfig::get(format!("{}/{schedule_id}", self.path)))
    }

    pub fn create(&self, params: &CreateScheduleParams) -> Result<Schedule, Error> {
        self.gateway.single(RequestConfig::post(self.path.as_str()).json(params)?)
    }

    pub fn update(&self, schedule_id: u64, params: &UpdateScheduleParams) -> Result<Schedule, Error> {
        self.gateway
            .single(RequestConfig::post(format!("{}/{schedule_id}", self.path)).json(params)?)
    }

    pub fn delete(&self, schedule_id: u64) -> Result<(), Error> {
        self.gateway
            .empty(RequestConfig::delete(format!("{}/{schedule_id}", self.path)))
    }

    /// Run the schedule now, regardless of its cron.
    pub fn execute(&self, schedule_id: u64) -> Result<(), Error> {
        self.gateway
            .empty(RequestConfig::post(format!("{}/{schedule_id}/execute", self.path)))
    }

    pub fn create_task(&self, schedule_id: u64, params: &CreateTaskParams) -> Result<ScheduleTask, Error> {
        self.gateway
            .single(RequestConfig::post(format!("{}/{schedule_id}/tasks", self.path)).json(params)?)
    }

    pub fn update_task(&self, schedule_id: u64, task_id: u64, params: &UpdateTaskParams) -> Result<ScheduleTask, Error> {
        self.gateway.single(
            RequestConfig::post(format!("{}/{schedule_id}/tasks/{task_id}", self.path)).json(params)?,
        )
    }

    pub fn delete_task(&self, schedule_id: u64, task_id: u64) -> Result<(), Error> {
        self.gateway
            .empty(RequestConfig::delete(format!("{}/{schedule_id}/tasks/{task_id}", self.path)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::http::HttpMethod;
    use crate::testing::{list, single, stub_gateway, StubTransport};
    use crate::types::TaskAction;
    use serde_json::json;

    const SERVER: &str = "/api/client/servers/1a7ce997";

    fn task(id: u64, action: &str) -> serde_json::Value {
        json!({
            "id": id, "sequence_id": id, "action": action, "payload": "say restarting",
            "time_offset": 0, "is_queued": false, "continue_on_failure": false,
            "created_at": "2024-01-01T00:00:00+00:00", "updated_at": "2024-01-01T00:00:00+00:00"
        })
    }

    #[test]
    fn get_exposes_included_tasks() {
        let attributes = json!({
            "id": 4,
            "name": "nightly restart",
            "cron": {"day_of_week": "*", "day_of_month": "*", "month": "*", "hour": "4", "minute": "0"},
            "is_active": true,
            "is_processing": false,
            "only_when_online": true,
            "last_run_at": null,
            "next_run_at": "2024-01-02T04:00:00+00:00",
            "created_at": "2024-01-01T00:00:00+00:00",
            "updated_at": "2024-01-01T00:00:00+00:00",
            "relationships": {"tasks": list("schedule_task", vec![task(1, "command"), task(2, "power")])}
        });
        let (gateway, _) = stub_gateway(StubTransport::json(200, single("server_schedule", attributes)));

        let schedule = Schedules::new(gateway, SERVER).get(4).unwrap();

        let actions: Vec<TaskAction> = schedule.tasks().iter().map(|task| task.action).collect();
        assert_eq!(actions, vec![TaskAction::Command, TaskAction::Power]);
        assert_eq!(schedule.cron.hour, "4");
    }

    #[test]
    fn update_task_posts_to_task_path() {
        let (gateway, stub) = stub_gateway(StubTransport::json(200, single("schedule_task", task(2, "delete_files"))));
        let params = UpdateTaskParams {
            time_offset: Some(30),
            ..Default::default()
        };

        let task = Schedules::new(gateway, SERVER).update_task(4, 2, &params).unwrap();

        assert_eq!(task.action, TaskAction::DeleteFiles);
        let request = stub.last_request();
        assert_eq!(request.method, HttpMethod::Post);
        assert_eq!(request.url, "https://panel.example.com/api/client/servers/1a7ce997/schedules/4/tasks/2");
        assert_eq!(stub.last_json(), json!({"time_offset": 30}));
    }

    #[test]
    fn execute_has_no_body() {
        let (gateway, stub) = stub_gateway(StubTransport::empty(204));
        Schedules::new(gateway, SERVER).execute(4).unwrap();
        assert!(stub.last_request().body.is_none());
    }
}
