use std::future::IntoFuture;
use std::marker::PhantomData;

// Original: https://github.com/HalsekiRaika/architectured/blob/e5caa5c7ae801d1aaac6e275b3ea0ef26d6ff26b/server/src/controller.rs
pub trait Intake<I>: 'static + Sync + Send {
    type To;
    fn emit(&self, input: I) -> Self::To;
}

pub trait TryIntake<I>: 'static + Sync + Send {
    type To;
    type Error;
    fn emit(&self, input: I) -> Result<Self::To, Self::Error>;
}

pub trait Exhaust<I>: 'static + Sync + Send {
    type To;
    fn emit(&self, input: I) -> Self::To;
}

/// Request `I` is turned into `D` by the transformer, a service turns `D` into `O`,
/// and the presenter renders `O`.
pub struct Controller<T, P, I, D, O> {
    transformer: T,
    presenter: P,
    _flow: PhantomData<fn(I) -> (D, O)>,
}

impl<T, P, I, D, O> Controller<T, P, I, D, O> {
    pub fn new(transformer: T, presenter: P) -> Self {
        Self {
            transformer,
            presenter,
            _flow: PhantomData,
        }
    }
}

impl<T, P, I, D, O> Controller<T, P, I, D, O>
where
    T: Intake<I, To = D>,
{
    pub fn intake(self, input: I) -> Transformed<P, D, O> {
        Transformed::new(self.transformer.emit(input), self.presenter)
    }
}

impl<T, P, I, D, O> Controller<T, P, I, D, O>
where
    T: TryIntake<I, To = D>,
{
    pub fn try_intake(self, input: I) -> Result<Transformed<P, D, O>, T::Error> {
        let transformed = self.transformer.emit(input)?;
        Ok(Transformed::new(transformed, self.presenter))
    }
}

impl<P, O> Controller<(), P, (), (), O>
where
    P: Exhaust<O>,
{
    /// For routes without input.
    pub async fn bypass<F, Fut, E>(self, f: F) -> Result<P::To, E>
    where
        F: FnOnce() -> Fut,
        Fut: IntoFuture<Output = Result<O, E>>,
    {
        let output = f().await?;
        Ok(self.presenter.emit(output))
    }
}

pub struct Transformed<P, D, O> {
    transformed: D,
    presenter: P,
    _output: PhantomData<fn() -> O>,
}

impl<P, D, O> Transformed<P, D, O> {
    fn new(transformed: D, presenter: P) -> Self {
        Self {
            transformed,
            presenter,
            _output: PhantomData,
        }
    }
}

impl<P, D, O> Transformed<P, D, O>
where
    P: Exhaust<O>,
{
    pub async fn handle<F, Fut, E>(self, f: F) -> Result<P::To, E>
    where
        F: FnOnce(D) -> Fut,
        Fut: IntoFuture<Output = Result<O, E>>,
    {
        let output = f(self.transformed).await?;
        Ok(self.presenter.emit(output))
    }
}

#[cfg(test)]
mod test {
    use super::{Controller, Exhaust, Intake, TryIntake};

    struct Parse;

    impl Intake<&'static str> for Parse {
        type To = usize;
        fn emit(&self, input: &'static str) -> Self::To {
            input.len()
        }
    }

    impl TryIntake<i64> for Parse {
        type To = u32;
        type Error = String;
        fn emit(&self, input: i64) -> Result<Self::To, Self::Error> {
            u32::try_from(input).map_err(|e| e.to_string())
        }
    }

    struct Render;

    impl Exhaust<usize> for Render {
        type To = String;
        fn emit(&self, input: usize) -> Self::To {
            format!("<{input}>")
        }
    }

    #[tokio::test]
    async fn input_flows_through_service_to_presenter() {
        let rendered = Controller::new(Parse, Render)
            .intake("four")
            .handle(|len| async move { Ok::<_, ()>(len * 2) })
            .await;
        assert_eq!(rendered, Ok("<8>".to_string()));
    }

    #[tokio::test]
    async fn service_error_skips_presenter() {
        let rendered = Controller::new(Parse, Render)
            .intake("four")
            .handle(|_| async move { Err::<usize, _>("down") })
            .await;
        assert_eq!(rendered, Err("down"));
    }

    #[test]
    fn rejected_input_never_reaches_service() {
        let transformed = Controller::<_, _, _, _, usize>::new(Parse, Render).try_intake(-1_i64);
        assert!(transformed.is_err());
    }

    #[tokio::test]
    async fn bypass_renders_without_input() {
        let rendered = Controller::new((), Render)
            .bypass(|| async { Ok::<usize, ()>(3) })
            .await;
        assert_eq!(rendered, Ok("<3>".to_string()));
    }
}
