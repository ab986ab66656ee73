//! MPEG-2 transport stream settings, standalone and inside HLS.

use super::enums::*;

shape! {
    /// Transport stream settings for standalone `.ts` outputs.
    pub struct M2tsSettings {
        audio_buffer_model: value(M2tsAudioBufferModel),
        audio_frames_per_pes: copy(i32),
        /// Audio elementary stream PIDs, in the order they are assigned.
        audio_pids: list(i32),
        /// Transport stream bitrate; 0 lets the service compute it.
        bitrate: copy(i32),
        buffer_model: value(M2tsBufferModel),
        dvb_nit_settings: value(DvbNitSettings),
        dvb_sdt_settings: value(DvbSdtSettings),
        dvb_sub_pids: list(i32),
        dvb_tdt_settings: value(DvbTdtSettings),
        dvb_teletext_pid: copy(i32),
        ebp_audio_interval: value(M2tsEbpAudioInterval),
        ebp_placement: value(M2tsEbpPlacement),
        es_rate_in_pes: value(M2tsEsRateInPes),
        force_ts_video_ebp_order: value(M2tsForceTsVideoEbpOrder),
        /// Fragment length in seconds for EBP markers.
        fragment_time: float(f64),
        max_pcr_interval: copy(i32),
        min_ebp_interval: copy(i32),
        nielsen_id3: value(M2tsNielsenId3),
        null_packet_bitrate: float(f64),
        pat_interval: copy(i32),
        pcr_control: value(M2tsPcrControl),
        pcr_pid: copy(i32),
        pmt_interval: copy(i32),
        pmt_pid: copy(i32),
        private_metadata_pid: copy(i32),
        program_number: copy(i32),
        rate_mode: value(M2tsRateMode),
        scte35_esam: value(M2tsScte35Esam),
        scte35_pid: copy(i32),
        scte35_source: value(M2tsScte35Source),
        segmentation_markers: value(M2tsSegmentationMarkers),
        segmentation_style: value(M2tsSegmentationStyle),
        segmentation_time: float(f64),
        timed_metadata_pid: copy(i32),
        transport_stream_id: copy(i32),
        video_pid: copy(i32),
    }
}

shape! {
    pub struct M2tsScte35Esam {
        /// PID carrying SCTE-35 messages produced from ESAM signals.
        scte35_esam_pid: copy(i32),
    }
}

shape! {
    /// DVB Network Information Table.
    pub struct DvbNitSettings {
        network_id: copy(i32),
        network_name: string(String),
        /// Milliseconds between NIT repetitions.
        nit_interval: copy(i32),
    }
}

shape! {
    /// DVB Service Description Table.
    pub struct DvbSdtSettings {
        output_sdt: value(DvbSdtOutputSdt),
        sdt_interval: copy(i32),
        service_name: string(String),
        service_provider_name: string(String),
    }
}

shape! {
    /// DVB Time and Date Table.
    pub struct DvbTdtSettings {
        tdt_interval: copy(i32),
    }
}

shape! {
    /// Transport stream settings for segments of an HLS output group.
    pub struct M3u8Settings {
        audio_frames_per_pes: copy(i32),
        audio_pids: list(i32),
        nielsen_id3: value(M3u8NielsenId3),
        pat_interval: copy(i32),
        pcr_control: value(M3u8PcrControl),
        pcr_pid: copy(i32),
        pmt_interval: copy(i32),
        pmt_pid: copy(i32),
        private_metadata_pid: copy(i32),
        program_number: copy(i32),
        scte35_pid: copy(i32),
        scte35_source: value(M3u8Scte35Source),
        timed_metadata: value(TimedMetadata),
        timed_metadata_pid: copy(i32),
        transport_stream_id: copy(i32),
        video_pid: copy(i32),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pid_lists_keep_insertion_order() {
        let appended = M2tsSettings::builder()
            .audio_pids(482)
            .audio_pids(483)
            .audio_pids(481)
            .build();
        assert_eq!(appended.audio_pids(), Some(&[482, 483, 481][..]));

        let replaced = appended
            .to_builder()
            .set_audio_pids(Some(vec![490, 491]))
            .dvb_sub_pids(460)
            .build();
        assert_eq!(replaced.audio_pids(), Some(&[490, 491][..]));
        assert_eq!(replaced.dvb_sub_pids(), Some(&[460][..]));
        assert_eq!(replaced.to_string(), "{AudioPids: [490, 491],DvbSubPids: [460]}");
    }

    #[test]
    fn pid_order_matters_for_equality() {
        let a = M3u8Settings::builder().audio_pids(481).audio_pids(482).build();
        let b = M3u8Settings::builder().audio_pids(482).audio_pids(481).build();
        assert_ne!(a, b);
    }

    #[test]
    fn empty_list_differs_from_unset() {
        let empty = M3u8Settings::builder().set_audio_pids(Some(Vec::new())).build();
        assert_ne!(empty, M3u8Settings::default());
        assert_eq!(empty.audio_pids(), Some(&[][..]));
        assert_eq!(empty.to_string(), "{AudioPids: []}");
    }

    #[test]
    fn dvb_tables_nest() {
        let m2ts = M2tsSettings::builder()
            .dvb_sdt_settings(
                DvbSdtSettings::builder()
                    .output_sdt(DvbSdtOutputSdt::SdtManual)
                    .service_name("Channel 1"),
            )
            .segmentation_markers(M2tsSegmentationMarkers::EbpLegacy)
            .build();
        assert_eq!(
            m2ts.to_string(),
            "{DvbSdtSettings: {OutputSdt: SDT_MANUAL,ServiceName: Channel 1},SegmentationMarkers: EBP_LEGACY}"
        );
    }
}
