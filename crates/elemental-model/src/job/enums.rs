//! Enumerations used by jobs, job templates and presets.

open_enums! {
    /// Accelerated transcoding preference.
    AccelerationMode {
        Disabled = "DISABLED",
        Enabled = "ENABLED",
        Preferred = "PREFERRED",
    }

    AccelerationStatus {
        NotApplicable = "NOT_APPLICABLE",
        InProgress = "IN_PROGRESS",
        Accelerated = "ACCELERATED",
        NotAccelerated = "NOT_ACCELERATED",
    }

    /// Which resource's tags are used for cost allocation.
    BillingTagsSource {
        Queue = "QUEUE",
        Preset = "PRESET",
        JobTemplate = "JOB_TEMPLATE",
        Job = "JOB",
    }

    JobPhase {
        Probing = "PROBING",
        Transcoding = "TRANSCODING",
        Uploading = "UPLOADING",
    }

    /// Lifecycle state of a job.
    JobStatus {
        Submitted = "SUBMITTED",
        Progressing = "PROGRESSING",
        Complete = "COMPLETE",
        Canceled = "CANCELED",
        Error = "ERROR",
    }

    SimulateReservedQueue {
        Disabled = "DISABLED",
        Enabled = "ENABLED",
    }

    /// How often status update events are emitted while a job runs.
    StatusUpdateInterval {
        Seconds10 = "SECONDS_10",
        Seconds12 = "SECONDS_12",
        Seconds15 = "SECONDS_15",
        Seconds20 = "SECONDS_20",
        Seconds30 = "SECONDS_30",
        Seconds60 = "SECONDS_60",
        Seconds120 = "SECONDS_120",
        Seconds180 = "SECONDS_180",
        Seconds240 = "SECONDS_240",
        Seconds300 = "SECONDS_300",
        Seconds360 = "SECONDS_360",
        Seconds420 = "SECONDS_420",
        Seconds480 = "SECONDS_480",
        Seconds540 = "SECONDS_540",
        Seconds600 = "SECONDS_600",
    }

    /// Policy for deriving output timecode: embedded, zero-based, or a specified start.
    TimecodeSource {
        Embedded = "EMBEDDED",
        Zerobased = "ZEROBASED",
        Specifiedstart = "SPECIFIEDSTART",
    }

    /// Whether a job template or preset is built in or user created.
    TemplateType {
        System = "SYSTEM",
        Custom = "CUSTOM",
    }

    JobTemplateListBy {
        Name = "NAME",
        CreationDate = "CREATION_DATE",
        System = "SYSTEM",
    }

    PresetListBy {
        Name = "NAME",
        CreationDate = "CREATION_DATE",
        System = "SYSTEM",
    }

    /// Sort order of list results.
    Order {
        Ascending = "ASCENDING",
        Descending = "DESCENDING",
    }
}
