//! The job resource and the status information the service attaches to it.

use super::enums::*;
use super::settings::JobSettings;
use super::templates::{AccelerationSettings, HopDestination};
use elemental_common::Timestamp;

shape! {
    /// A transcoding job, as submitted and as reported back by the service.
    pub struct Job {
        acceleration_settings: value(AccelerationSettings),
        acceleration_status: value(AccelerationStatus),
        arn: string(String),
        billing_tags_source: value(BillingTagsSource),
        created_at: copy(Timestamp),
        current_phase: value(JobPhase),
        error_code: copy(i32),
        error_message: string(String),
        /// Queues the job moves through if it waits too long.
        hop_destinations: list(HopDestination),
        id: string(String),
        /// Progress of the current phase, 0 to 100.
        job_percent_complete: copy(i32),
        /// Name of the job template the job was created from.
        job_template: string(String),
        messages: value(JobMessages),
        output_group_details: list(OutputGroupDetail),
        /// Queue priority, -50 to 50.
        priority: copy(i32),
        queue: string(String),
        queue_transitions: list(QueueTransition),
        retry_count: copy(i32),
        /// IAM role ARN the service assumes to read inputs and write outputs.
        role: string(String),
        settings: value(JobSettings),
        simulate_reserved_queue: value(SimulateReservedQueue),
        status: value(JobStatus),
        status_update_interval: value(StatusUpdateInterval),
        timing: value(Timing),
        /// Caller-defined key/value pairs echoed in job events.
        user_metadata: map(String),
    }
}

shape! {
    /// Informational and warning messages produced while the job ran.
    pub struct JobMessages {
        info: list(String),
        warning: list(String),
    }
}

shape! {
    pub struct OutputGroupDetail {
        output_details: list(OutputDetail),
    }
}

shape! {
    /// Facts about one finished output.
    pub struct OutputDetail {
        duration_in_ms: copy(i32),
        video_details: value(VideoDetail),
    }
}

shape! {
    pub struct VideoDetail {
        height_in_px: copy(i32),
        width_in_px: copy(i32),
    }
}

shape! {
    /// A move of the job from one queue to another.
    pub struct QueueTransition {
        destination_queue: string(String),
        source_queue: string(String),
        timestamp: copy(Timestamp),
    }
}

shape! {
    /// When the job was submitted, started and finished.
    pub struct Timing {
        finish_time: copy(Timestamp),
        start_time: copy(Timestamp),
        submit_time: copy(Timestamp),
    }
}
