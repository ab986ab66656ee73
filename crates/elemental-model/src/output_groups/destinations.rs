//! Where and how output files are written.

use super::enums::*;

shape! {
    pub struct DestinationSettings {
        s3_settings: value(S3DestinationSettings),
    }
}

shape! {
    /// Access control and encryption of objects written to S3.
    pub struct S3DestinationSettings {
        access_control: value(S3DestinationAccessControl),
        encryption: value(S3EncryptionSettings),
    }
}

shape! {
    pub struct S3DestinationAccessControl {
        canned_acl: value(S3ObjectCannedAcl),
    }
}

shape! {
    /// Server-side encryption of output objects.
    pub struct S3EncryptionSettings {
        encryption_type: value(S3ServerSideEncryptionType),
        /// KMS key used with SERVER_SIDE_ENCRYPTION_KMS; the account's default
        /// key is used when unset.
        kms_key_arn: string(String),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn s3_destination_renders() {
        let destination = DestinationSettings::builder()
            .s3_settings(
                S3DestinationSettings::builder()
                    .access_control(
                        S3DestinationAccessControl::builder()
                            .canned_acl(S3ObjectCannedAcl::BucketOwnerFullControl),
                    )
                    .encryption(
                        S3EncryptionSettings::builder()
                            .encryption_type(S3ServerSideEncryptionType::ServerSideEncryptionS3),
                    ),
            )
            .build();
        assert_eq!(
            destination.to_string(),
            "{S3Settings: {AccessControl: {CannedAcl: BUCKET_OWNER_FULL_CONTROL},Encryption: {EncryptionType: SERVER_SIDE_ENCRYPTION_S3}}}"
        );
    }
}
