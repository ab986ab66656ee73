//! Request and response shapes of the job, job template and preset
//! operations.
//!
//! These only describe payloads; sending them is up to the caller.

use crate::job::{
    AccelerationSettings, BillingTagsSource, HopDestination, Job, JobSettings, JobStatus,
    JobTemplate, JobTemplateListBy, JobTemplateSettings, Order, Preset, PresetListBy,
    PresetSettings, SimulateReservedQueue, StatusUpdateInterval,
};

shape! {
    /// Payload of `CreateJob`.
    pub struct CreateJobRequest {
        acceleration_settings: value(AccelerationSettings),
        billing_tags_source: value(BillingTagsSource),
        /// Idempotency token.
        client_request_token: string(String),
        hop_destinations: list(HopDestination),
        /// Name or ARN of the template the job starts from.
        job_template: string(String),
        priority: copy(i32),
        queue: string(String),
        /// IAM role ARN. Required.
        role: string(String),
        settings: value(JobSettings),
        simulate_reserved_queue: value(SimulateReservedQueue),
        status_update_interval: value(StatusUpdateInterval),
        tags: map(String),
        user_metadata: map(String),
    }
}

shape! {
    pub struct CreateJobResponse {
        job: value(Job),
    }
}

shape! {
    pub struct GetJobRequest {
        id: string(String),
    }
}

shape! {
    pub struct GetJobResponse {
        job: value(Job),
    }
}

shape! {
    /// Payload of `ListJobs`. Results are paged through `next_token`.
    pub struct ListJobsRequest {
        /// Page size, 1 to 20.
        max_results: copy(i32),
        next_token: string(String),
        order: value(Order),
        queue: string(String),
        status: value(JobStatus),
    }
}

shape! {
    pub struct ListJobsResponse {
        jobs: list(Job),
        next_token: string(String),
    }
}

shape! {
    pub struct CancelJobRequest {
        id: string(String),
    }
}

shape! {
    /// Payload of `CreateJobTemplate`.
    pub struct CreateJobTemplateRequest {
        acceleration_settings: value(AccelerationSettings),
        category: string(String),
        description: string(String),
        hop_destinations: list(HopDestination),
        name: string(String),
        priority: copy(i32),
        queue: string(String),
        settings: value(JobTemplateSettings),
        status_update_interval: value(StatusUpdateInterval),
        tags: map(String),
    }
}

shape! {
    pub struct CreateJobTemplateResponse {
        job_template: value(JobTemplate),
    }
}

shape! {
    pub struct GetJobTemplateRequest {
        name: string(String),
    }
}

shape! {
    pub struct GetJobTemplateResponse {
        job_template: value(JobTemplate),
    }
}

shape! {
    pub struct ListJobTemplatesRequest {
        category: string(String),
        list_by: value(JobTemplateListBy),
        max_results: copy(i32),
        next_token: string(String),
        order: value(Order),
    }
}

shape! {
    pub struct ListJobTemplatesResponse {
        job_templates: list(JobTemplate),
        next_token: string(String),
    }
}

shape! {
    /// Payload of `CreatePreset`.
    pub struct CreatePresetRequest {
        category: string(String),
        description: string(String),
        name: string(String),
        settings: value(PresetSettings),
        tags: map(String),
    }
}

shape! {
    pub struct CreatePresetResponse {
        preset: value(Preset),
    }
}

shape! {
    pub struct GetPresetRequest {
        name: string(String),
    }
}

shape! {
    pub struct GetPresetResponse {
        preset: value(Preset),
    }
}

shape! {
    pub struct ListPresetsRequest {
        category: string(String),
        list_by: value(PresetListBy),
        max_results: copy(i32),
        next_token: string(String),
        order: value(Order),
    }
}

shape! {
    pub struct ListPresetsResponse {
        next_token: string(String),
        presets: list(Preset),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_job_from_template() {
        let request = CreateJobRequest::builder()
            .role("arn:aws:iam::111122223333:role/MediaConvert")
            .job_template("vod-hls")
            .tags("team", "video")
            .status_update_interval(StatusUpdateInterval::Seconds30)
            .build();
        assert_eq!(request.job_template(), Some("vod-hls"));
        assert_eq!(request.tags().and_then(|tags| tags.get("team")).map(String::as_str), Some("video"));
        assert_eq!(
            request.to_string(),
            "{JobTemplate: vod-hls,Role: arn:aws:iam::111122223333:role/MediaConvert,StatusUpdateInterval: SECONDS_30,Tags: {team=video}}"
        );
    }

    #[test]
    fn list_requests_share_order() {
        let jobs = ListJobsRequest::builder()
            .order(Order::Descending)
            .status(JobStatus::Error)
            .max_results(20)
            .build();
        let presets = ListPresetsRequest::builder()
            .order("DESCENDING")
            .list_by(PresetListBy::CreationDate)
            .build();
        assert_eq!(jobs.order(), presets.order());
    }

    #[test]
    fn responses_wrap_resources() {
        let response = GetJobTemplateResponse::builder()
            .job_template(JobTemplate::builder().name("vod-hls"))
            .build();
        assert_eq!(
            response.job_template().and_then(JobTemplate::name),
            Some("vod-hls")
        );
        assert_eq!(response.to_string(), "{JobTemplate: {Name: vod-hls}}");
        assert_eq!(CancelJobRequest::default().to_string(), "{}");
    }
}
