//! DRM key providers and per-package encryption settings.

mod enums;

pub use enums::*;

shape! {
    /// SPEKE key provider for HLS, DASH and Microsoft Smooth outputs.
    pub struct SpekeKeyProvider {
        /// ARN of the ACM certificate used to encrypt content keys in transit.
        certificate_arn: string(String),
        /// Content identifier sent to the key server.
        resource_id: string(String),
        /// DRM system IDs, as lowercase hex GUIDs.
        system_ids: list(String),
        /// Key server endpoint.
        url: string(String),
    }
}

shape! {
    /// SPEKE key provider for CMAF outputs, with separate DASH and HLS
    /// signalling.
    pub struct SpekeKeyProviderCmaf {
        certificate_arn: string(String),
        /// System IDs signalled in the DASH manifest.
        dash_signaled_system_ids: list(String),
        /// System IDs signalled in the HLS manifest.
        hls_signaled_system_ids: list(String),
        resource_id: string(String),
        url: string(String),
    }
}

shape! {
    /// A fixed content key supplied with the job.
    pub struct StaticKeyProvider {
        key_format: string(String),
        key_format_versions: string(String),
        /// 32-character hex key value.
        static_key_value: string(String),
        /// URL the player fetches the key from.
        url: string(String),
    }
}

shape! {
    /// Encryption of a CMAF output group.
    pub struct CmafEncryptionSettings {
        /// 32-character hex IV used for every segment.
        constant_initialization_vector: string(String),
        encryption_method: value(CmafEncryptionType),
        initialization_vector_in_manifest: value(CmafInitializationVectorInManifest),
        speke_key_provider: value(SpekeKeyProviderCmaf),
        static_key_provider: value(StaticKeyProvider),
        key_provider_type: value(CmafKeyProviderType) as "Type" / "type",
    }
}

shape! {
    /// Encryption of an HLS output group.
    pub struct HlsEncryptionSettings {
        constant_initialization_vector: string(String),
        encryption_method: value(HlsEncryptionType),
        initialization_vector_in_manifest: value(HlsInitializationVectorInManifest),
        offline_encrypted: value(HlsOfflineEncrypted),
        speke_key_provider: value(SpekeKeyProvider),
        static_key_provider: value(StaticKeyProvider),
        key_provider_type: value(HlsKeyProviderType) as "Type" / "type",
    }
}

shape! {
    /// Encryption of a DASH ISO output group. Only SPEKE is supported.
    pub struct DashIsoEncryptionSettings {
        playback_device_compatibility: value(DashIsoPlaybackDeviceCompatibility),
        speke_key_provider: value(SpekeKeyProvider),
    }
}

shape! {
    pub struct MsSmoothEncryptionSettings {
        speke_key_provider: value(SpekeKeyProvider),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const WIDEVINE: &str = "edef8ba9-79d6-4ace-a3c8-27dcd51d21ed";
    const PLAYREADY: &str = "9a04f079-9840-4286-ab92-e65be0885f95";

    #[test]
    fn signaled_system_ids_keep_order() {
        let provider = SpekeKeyProviderCmaf::builder()
            .dash_signaled_system_ids(WIDEVINE)
            .dash_signaled_system_ids(PLAYREADY)
            .hls_signaled_system_ids(String::from(PLAYREADY))
            .build();
        assert_eq!(
            provider.dash_signaled_system_ids(),
            Some(&[WIDEVINE.to_string(), PLAYREADY.to_string()][..])
        );
        assert_eq!(
            provider.hls_signaled_system_ids().map(<[String]>::len),
            Some(1)
        );
    }

    #[test]
    fn key_provider_type_renders_as_type() {
        let settings = CmafEncryptionSettings::builder()
            .encryption_method(CmafEncryptionType::SampleAes)
            .key_provider_type(CmafKeyProviderType::StaticKey)
            .static_key_provider(
                StaticKeyProvider::builder()
                    .static_key_value("0123456789abcdef0123456789abcdef")
                    .url("https://keys.example.com/key"),
            )
            .build();
        assert_eq!(
            settings.to_string(),
            "{EncryptionMethod: SAMPLE_AES,StaticKeyProvider: {StaticKeyValue: 0123456789abcdef0123456789abcdef,Url: https://keys.example.com/key},Type: STATIC_KEY}"
        );
    }

    #[cfg(feature = "serde")]
    #[test]
    fn key_provider_type_uses_type_key() {
        let settings: HlsEncryptionSettings = serde_json::from_str(
            r#"{"encryptionMethod": "AES128", "type": "SPEKE",
                "spekeKeyProvider": {"systemIds": ["81376844-f976-481e-a84e-cc25d39b0b33"]}}"#,
        )
        .unwrap();
        assert_eq!(settings.key_provider_type(), Some(&HlsKeyProviderType::Speke));
        assert_eq!(settings.encryption_method(), Some(&HlsEncryptionType::Aes128));
        assert_eq!(
            settings
                .speke_key_provider()
                .and_then(SpekeKeyProvider::system_ids)
                .map(<[String]>::len),
            Some(1)
        );
    }
}
