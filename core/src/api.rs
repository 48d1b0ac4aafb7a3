use crate::Context;
use std::fmt::Debug;

/// SigningCredential is the trait used by signer as the signing credential.
pub trait SigningCredential: Clone + Debug + Send + Sync + Unpin + 'static {
    /// Check if the signing credential is valid.
    fn is_valid(&self) -> bool;
}

impl<T: SigningCredential> SigningCredential for Option<T> {
    fn is_valid(&self) -> bool {
        let Some(ctx) = self else {
            return false;
        };

        ctx.is_valid()
    }
}

/// SignRequest is the trait used by signer to sign a request in place.
///
/// Signing never performs I/O, so this trait is synchronous.
pub trait SignRequest: Debug + Send + Sync + Unpin + 'static {
    /// Credential used by this builder.
    ///
    /// Typically, it will be an access key pair.
    type Credential: Send + Sync + Unpin + 'static;

    /// Request type that will be mutated by signing.
    type Request;

    /// Sign the given request.
    ///
    /// ## Credential
    ///
    /// The `credential` parameter is the credential required by the signer to
    /// sign the request. `None` means anonymous access: implementations must
    /// return `Ok(())` and leave the request untouched.
    ///
    /// ## Failure
    ///
    /// On error the request must not be dispatched by the caller.
    fn sign_request(
        &self,
        ctx: &Context,
        req: &mut Self::Request,
        credential: Option<&Self::Credential>,
    ) -> crate::Result<()>;
}
