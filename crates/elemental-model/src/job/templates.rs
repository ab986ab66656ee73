//! Job templates, presets and the pieces they share with jobs.

use super::enums::*;
use super::settings::JobTemplateSettings;
use crate::audio::AudioDescription;
use crate::captions::CaptionDescriptionPreset;
use crate::containers::ContainerSettings;
use crate::video::VideoDescription;
use elemental_common::Timestamp;

shape! {
    /// Accelerated transcoding preference.
    pub struct AccelerationSettings {
        mode: value(AccelerationMode),
    }
}

shape! {
    /// A queue a job hops to when it has waited too long in its current one.
    pub struct HopDestination {
        /// Priority in the destination queue, -50 to 50.
        priority: copy(i32),
        /// Destination queue ARN; the default queue when unset.
        queue: string(String),
        /// Minutes to wait before hopping, 1 to 4320.
        wait_minutes: copy(i32),
    }
}

shape! {
    /// A named, reusable bundle of job settings.
    pub struct JobTemplate {
        acceleration_settings: value(AccelerationSettings),
        arn: string(String),
        category: string(String),
        created_at: copy(Timestamp),
        description: string(String),
        /// Queue hops applied to jobs created from this template.
        hop_destinations: list(HopDestination),
        last_updated: copy(Timestamp),
        name: string(String),
        priority: copy(i32),
        queue: string(String),
        settings: value(JobTemplateSettings),
        status_update_interval: value(StatusUpdateInterval),
        template_type: value(TemplateType) as "Type" / "type",
    }
}

shape! {
    /// A named, reusable bundle of output settings.
    pub struct Preset {
        arn: string(String),
        category: string(String),
        created_at: copy(Timestamp),
        description: string(String),
        last_updated: copy(Timestamp),
        name: string(String),
        settings: value(PresetSettings),
        preset_type: value(TemplateType) as "Type" / "type",
    }
}

shape! {
    /// The output settings a preset stores.
    pub struct PresetSettings {
        audio_descriptions: list(AudioDescription),
        caption_descriptions: list(CaptionDescriptionPreset),
        container_settings: value(ContainerSettings),
        video_description: value(VideoDescription),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::containers::ContainerType;

    fn hops() -> Vec<HopDestination> {
        vec![
            HopDestination::builder().queue("arn:aws:mediaconvert:us-east-1:111122223333:queues/overflow").wait_minutes(15).build(),
            HopDestination::builder().priority(10).wait_minutes(60).build(),
        ]
    }

    #[test]
    fn hop_destinations_keep_order() {
        let template = JobTemplate::builder()
            .name("vod-hls")
            .set_hop_destinations(Some(hops()))
            .build();
        let waits: Vec<_> = template
            .hop_destinations()
            .unwrap()
            .iter()
            .filter_map(HopDestination::wait_minutes)
            .collect();
        assert_eq!(waits, [15, 60]);
    }

    #[test]
    fn appending_matches_setting_the_list() {
        let [first, second]: [HopDestination; 2] = hops().try_into().unwrap();
        let appended = JobTemplate::builder()
            .hop_destinations(first)
            .hop_destinations(second)
            .build();
        let set = JobTemplate::builder().set_hop_destinations(Some(hops())).build();
        assert_eq!(appended, set);
    }

    #[test]
    fn template_type_renders_as_type() {
        let template = JobTemplate::builder()
            .name("System-Ott_Hls_Ts_Avc_Aac")
            .template_type(TemplateType::System)
            .acceleration_settings(AccelerationSettings::builder().mode(AccelerationMode::Preferred))
            .build();
        assert_eq!(
            template.to_string(),
            "{AccelerationSettings: {Mode: PREFERRED},Name: System-Ott_Hls_Ts_Avc_Aac,Type: SYSTEM}"
        );
    }

    #[test]
    fn preset_holds_output_settings() {
        let preset = Preset::builder()
            .name("mp4-1080p")
            .preset_type(TemplateType::Custom)
            .settings(
                PresetSettings::builder()
                    .container_settings(ContainerSettings::builder().container(ContainerType::Mp4))
                    .video_description(VideoDescription::builder().width(1920).height(1080)),
            )
            .build();
        let settings = preset.settings().unwrap();
        assert_eq!(
            settings.container_settings().and_then(ContainerSettings::container),
            Some(&ContainerType::Mp4)
        );
        assert_eq!(
            settings.video_description().and_then(VideoDescription::width),
            Some(1920)
        );
    }

    #[cfg(feature = "serde")]
    #[test]
    fn preset_type_uses_the_type_key() {
        let preset: Preset = serde_json::from_str(
            r#"{"name": "p", "type": "CUSTOM", "createdAt": 1586000000, "lastUpdated": "2020-04-04T11:33:20Z"}"#,
        )
        .unwrap();
        assert_eq!(preset.preset_type(), Some(&TemplateType::Custom));
        assert_eq!(preset.created_at(), preset.last_updated());
    }
}
