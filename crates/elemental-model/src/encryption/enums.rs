//! Enumerations used by DRM and encryption shapes.

open_enums! {
    /// Encryption scheme for CMAF outputs.
    CmafEncryptionType {
        SampleAes = "SAMPLE_AES",
        AesCtr = "AES_CTR",
    }

    CmafInitializationVectorInManifest {
        Include = "INCLUDE",
        Exclude = "EXCLUDE",
    }

    /// Where CMAF content keys come from.
    CmafKeyProviderType {
        Speke = "SPEKE",
        StaticKey = "STATIC_KEY",
    }

    DashIsoPlaybackDeviceCompatibility {
        CencV1 = "CENC_V1",
        UnencryptedSei = "UNENCRYPTED_SEI",
    }

    /// Encryption scheme for HLS outputs.
    HlsEncryptionType {
        Aes128 = "AES128",
        SampleAes = "SAMPLE_AES",
    }

    HlsInitializationVectorInManifest {
        Include = "INCLUDE",
        Exclude = "EXCLUDE",
    }

    HlsKeyProviderType {
        Speke = "SPEKE",
        StaticKey = "STATIC_KEY",
    }

    HlsOfflineEncrypted {
        Enabled = "ENABLED",
        Disabled = "DISABLED",
    }
}
