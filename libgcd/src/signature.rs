use crate::error::*;
use crate::payload::SHA1_LEN;
use rsa::pkcs1::DecodeRsaPrivateKey;
use rsa::pkcs8::DecodePrivateKey;
use rsa::traits::PublicKeyParts;
use rsa::{Pkcs1v15Sign, RsaPrivateKey};
use sha1::{Digest, Sha1};

pub const AES_KEY_Y_LEN: usize = 16;
pub const SIGNATURE_LEN: usize = 0x74;
pub const SIGNATURE_SIGNED_LEN: usize = 0x80;

/// Bytes [0, SIGNATURE_HASHED_LEN) of the signature block are covered by its own SHA-1.
const SIGNATURE_HASHED_LEN: usize = 0x60;

/// Produces the raw signed form of a signature block.
pub trait Signer {
    fn sign(&self, data: &[u8]) -> Result<Vec<u8>, Error>;
}

/// Signs with PKCS#1 v1.5 type-1 padding over the raw data, without a DigestInfo prefix.
pub struct RsaSigner {
    key: RsaPrivateKey,
}

impl RsaSigner {
    pub fn new(key: RsaPrivateKey) -> Result<RsaSigner, Error> {
        if key.size() != SIGNATURE_SIGNED_LEN {
            return make_error(Error::Signing(format!(
                "expected a {}-bit RSA key, got {} bits",
                SIGNATURE_SIGNED_LEN * 8,
                key.size() * 8
            )));
        }
        Ok(RsaSigner { key })
    }

    /// Imports a DER private key, PKCS#1 `RSAPrivateKey` first and PKCS#8 otherwise.
    pub fn from_der(der: &[u8]) -> Result<RsaSigner, Error> {
        let key = match RsaPrivateKey::from_pkcs1_der(der) {
            Ok(key) => key,
            Err(pkcs1_error) => match RsaPrivateKey::from_pkcs8_der(der) {
                Ok(key) => key,
                Err(pkcs8_error) => {
                    return make_error(Error::KeyImport(format!(
                        "not a PKCS#1 ({}) or PKCS#8 ({}) private key",
                        pkcs1_error, pkcs8_error
                    )))
                }
            },
        };
        RsaSigner::new(key)
    }
}

impl Signer for RsaSigner {
    fn sign(&self, data: &[u8]) -> Result<Vec<u8>, Error> {
        match self.key.sign(Pkcs1v15Sign::new_unprefixed(), data) {
            Ok(signature) => Ok(signature),
            Err(e) => make_error(Error::Signing(e.to_string())),
        }
    }
}

/// The block signed into header offset 0x100.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GcdSignature {
    pub aes_key_y: [u8; AES_KEY_Y_LEN],
    pub header_sha1: [u8; SHA1_LEN],
    pub arm9_sha1: [u8; SHA1_LEN],
    pub arm7_sha1: [u8; SHA1_LEN],
}

impl GcdSignature {
    pub fn to_bytes(&self) -> [u8; SIGNATURE_LEN] {
        let mut bytes = [0; SIGNATURE_LEN];
        bytes[0x00..0x10].copy_from_slice(&self.aes_key_y);
        bytes[0x10..0x24].copy_from_slice(&self.header_sha1);
        bytes[0x24..0x38].copy_from_slice(&self.arm9_sha1);
        bytes[0x38..0x4C].copy_from_slice(&self.arm7_sha1);
        let self_sha1 = Sha1::digest(&bytes[0..SIGNATURE_HASHED_LEN]);
        bytes[SIGNATURE_HASHED_LEN..SIGNATURE_HASHED_LEN + SHA1_LEN].copy_from_slice(&self_sha1);
        bytes
    }

    pub fn sign(&self, signer: &dyn Signer) -> Result<[u8; SIGNATURE_SIGNED_LEN], Error> {
        let signed = signer.sign(&self.to_bytes())?;
        if signed.len() != SIGNATURE_SIGNED_LEN {
            return make_error(Error::Signing(format!(
                "signature is {} bytes instead of {}",
                signed.len(),
                SIGNATURE_SIGNED_LEN
            )));
        }
        let mut result = [0; SIGNATURE_SIGNED_LEN];
        result.copy_from_slice(&signed);
        Ok(result)
    }
}

#[cfg(test)]
mod test {
    use crate::signature::*;
    use rsa::pkcs1::EncodeRsaPrivateKey;
    use rsa::pkcs8::EncodePrivateKey;

    fn sample() -> GcdSignature {
        GcdSignature {
            aes_key_y: [1; 16],
            header_sha1: [2; 20],
            arm9_sha1: [3; 20],
            arm7_sha1: [4; 20],
        }
    }

    #[test]
    fn layout() {
        let bytes = sample().to_bytes();
        assert!(bytes[0x00..0x10].iter().all(|b| *b == 1));
        assert!(bytes[0x10..0x24].iter().all(|b| *b == 2));
        assert!(bytes[0x24..0x38].iter().all(|b| *b == 3));
        assert!(bytes[0x38..0x4C].iter().all(|b| *b == 4));
        assert!(bytes[0x4C..0x60].iter().all(|b| *b == 0));
        assert_eq!(&bytes[0x60..0x74], &Sha1::digest(&bytes[0..0x60])[..]);
    }

    struct SimpleSigner {}
    impl Signer for SimpleSigner {
        fn sign(&self, data: &[u8]) -> Result<Vec<u8>, Error> {
            let mut signed = data.to_vec();
            signed.resize(SIGNATURE_SIGNED_LEN, 0xFF);
            Ok(signed)
        }
    }

    struct ShortSigner {}
    impl Signer for ShortSigner {
        fn sign(&self, data: &[u8]) -> Result<Vec<u8>, Error> {
            Ok(data.to_vec())
        }
    }

    #[test]
    fn custom_signer() {
        let signature = sample();
        let signed = signature.sign(&SimpleSigner {}).unwrap();
        assert_eq!(&signed[0..SIGNATURE_LEN], &signature.to_bytes()[..]);
        assert!(signed[SIGNATURE_LEN..].iter().all(|b| *b == 0xFF));
        assert!(signature.sign(&ShortSigner {}).is_err());
    }

    #[test]
    fn rsa_sign() {
        let mut rng = rand::thread_rng();
        let key = RsaPrivateKey::new(&mut rng, 1024).unwrap();
        let public_key = key.to_public_key();

        let pkcs1 = key.to_pkcs1_der().unwrap();
        let pkcs8 = key.to_pkcs8_der().unwrap();
        let signer = RsaSigner::from_der(pkcs1.as_bytes()).unwrap();
        let signer8 = RsaSigner::from_der(pkcs8.as_bytes()).unwrap();

        let signature = sample();
        let signed = signature.sign(&signer).unwrap();
        public_key
            .verify(
                Pkcs1v15Sign::new_unprefixed(),
                &signature.to_bytes(),
                &signed,
            )
            .unwrap();

        // PKCS#1 v1.5 signing is deterministic
        assert_eq!(signature.sign(&signer8).unwrap()[..], signed[..]);
    }

    #[test]
    fn bad_key() {
        assert!(matches!(
            RsaSigner::from_der(&[0x30, 0x03, 0x02, 0x01, 0x00]),
            Err(Error::KeyImport(_))
        ));

        let mut rng = rand::thread_rng();
        let key = RsaPrivateKey::new(&mut rng, 512).unwrap();
        assert!(matches!(RsaSigner::new(key), Err(Error::Signing(_))));
    }
}
