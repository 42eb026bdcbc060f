use std::sync::Arc;

use bytes::BytesMut;
use tokio::fs::File;
use tokio::io::{AsyncRead, AsyncReadExt, AsyncWrite, AsyncWriteExt};
use tracing::{debug, error, info};

use crate::http::error::{Fault, ServeError};
use crate::http::parser::{has_request_line, parse_request_line};
use crate::http::path::{self, ResolvedPath};
use crate::http::request::Request;
use crate::http::response::{Response, StatusCode};
use crate::http::site::Site;
use crate::http::writer::ResponseWriter;

const READ_CHUNK: usize = 1024;

/// What a successful stat told us about the file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FileMetadata {
    pub len: u64,
}

/// Handles exactly one request on one stream, then closes it.
///
/// Everything the connection touches (read buffer, request, path, file
/// handle) is owned here; the only thing shared with other connections is
/// the read-only `Site`.
pub struct Connection<S> {
    stream: S,
    site: Arc<Site>,
    buffer: BytesMut,
    state: ConnectionState,
    status: Option<StatusCode>,
}

pub enum ConnectionState {
    ReadingRequest,
    Parsed(Request),
    Resolving(Request, ResolvedPath),
    Serving(Request, ResolvedPath, FileMetadata, File),
    Writing(ResponseWriter, bool), // bool = faulted?
    Responded,
    Closed,
}

impl<S> Connection<S>
where
    S: AsyncRead + AsyncWrite + Unpin,
{
    pub fn new(stream: S, site: Arc<Site>) -> Self {
        let capacity = site.max_request_size;
        Self {
            stream,
            site,
            buffer: BytesMut::with_capacity(capacity),
            state: ConnectionState::ReadingRequest,
            status: None,
        }
    }

    pub fn state(&self) -> &ConnectionState {
        &self.state
    }

    /// Status of the response that was (or was about to be) written.
    pub fn status(&self) -> Option<StatusCode> {
        self.status
    }

    pub async fn run(&mut self) -> anyhow::Result<()> {
        loop {
            match std::mem::replace(&mut self.state, ConnectionState::Closed) {
                ConnectionState::ReadingRequest => {
                    self.state = match self.read_request().await {
                        Ok(req) => ConnectionState::Parsed(req),
                        Err(e) => self.fail(e, false),
                    };
                }

                ConnectionState::Parsed(req) => {
                    self.state = if req.method.is_supported() {
                        let resolved = path::resolve(&self.site.root, &req.target);
                        ConnectionState::Resolving(req, resolved)
                    } else {
                        debug!(method = %req.method, uri = %req.target, "Unsupported method");
                        self.fail(ServeError::Unimplemented, false)
                    };
                }

                ConnectionState::Resolving(req, resolved) => {
                    self.state = match open(&resolved).await {
                        Ok((meta, file)) => ConnectionState::Serving(req, resolved, meta, file),
                        Err(e) => {
                            debug!(uri = %req.target, path = %resolved, "Resolved path is not servable");
                            self.fail(e, req.is_head())
                        }
                    };
                }

                ConnectionState::Serving(req, resolved, meta, file) => {
                    self.state = match serve(&self.site, &req, &resolved, meta, file).await {
                        Ok(response) => {
                            info!(
                                method = %req.method,
                                uri = %req.target,
                                path = %resolved,
                                bytes = meta.len,
                                "200 OK"
                            );
                            self.respond(response, false)
                        }
                        Err(e) => self.fail(e, req.is_head()),
                    };
                }

                ConnectionState::Writing(mut writer, faulted) => {
                    if let Err(e) = writer.write_to_stream(&mut self.stream).await {
                        self.state = ConnectionState::Closed;
                        return Err(e.context("writing response"));
                    }
                    if let Err(e) = self.stream.shutdown().await {
                        debug!(error = %e, "Shutdown failed");
                    }

                    self.state = if faulted {
                        ConnectionState::Closed
                    } else {
                        ConnectionState::Responded
                    };
                }

                state @ (ConnectionState::Responded | ConnectionState::Closed) => {
                    self.state = state;
                    break;
                }
            }
        }

        Ok(())
    }

    /// Reads until the request line is complete, the size bound is hit, or
    /// the peer stops sending. Bytes past the bound are never read.
    pub async fn read_request(&mut self) -> Result<Request, ServeError> {
        let limit = self.site.max_request_size;
        let mut temp = [0u8; READ_CHUNK];

        while !has_request_line(&self.buffer) && self.buffer.len() < limit {
            let want = (limit - self.buffer.len()).min(temp.len());
            let n = self.stream.read(&mut temp[..want]).await.map_err(Fault::Read)?;

            if n == 0 {
                // Client closed; parse whatever arrived
                break;
            }

            self.buffer.extend_from_slice(&temp[..n]);
        }

        Ok(parse_request_line(&self.buffer)?)
    }

    fn respond(&mut self, response: Response, faulted: bool) -> ConnectionState {
        self.status = Some(response.status);
        ConnectionState::Writing(ResponseWriter::new(&response), faulted)
    }

    fn fail(&mut self, err: ServeError, head: bool) -> ConnectionState {
        let faulted = matches!(err, ServeError::InternalFault(_));
        if faulted {
            error!(error = %err, "Request failed");
        } else {
            debug!(error = %err, status = err.status().as_u16(), "Request rejected");
        }

        let response = err.to_response();
        let response = if head { response.into_head() } else { response };
        self.respond(response, faulted)
    }
}

/// Builds the 200 response. HEAD never reads the file but reports the same
/// length and type GET would.
async fn serve(
    site: &Site,
    req: &Request,
    resolved: &ResolvedPath,
    meta: FileMetadata,
    file: File,
) -> Result<Response, ServeError> {
    let content_type = site
        .mime
        .resolve(resolved)
        .map(|entry| entry.content_type.as_str());

    if req.is_head() {
        drop(file);
        return Ok(Response::file_head(meta.len, content_type));
    }

    let body = read_body(file, meta).await?;
    Ok(Response::file(body, content_type))
}

/// Stats then opens the file. A failed stat, or anything that is not a
/// regular file, is a 404; an open failure after a good stat is a 500.
async fn open(resolved: &ResolvedPath) -> Result<(FileMetadata, File), ServeError> {
    let meta = tokio::fs::metadata(resolved).await.map_err(ServeError::NotFound)?;
    if !meta.is_file() {
        return Err(ServeError::NotFound(std::io::Error::other("not a regular file")));
    }

    let file = File::open(resolved).await.map_err(Fault::Open)?;
    Ok((FileMetadata { len: meta.len() }, file))
}

/// Reads exactly `meta.len` bytes. Anything less is a fault, and the partial
/// buffer is dropped without being sent.
async fn read_body(file: File, meta: FileMetadata) -> Result<Vec<u8>, ServeError> {
    let expected = meta.len;
    let len = usize::try_from(expected).map_err(|_| Fault::Alloc(expected))?;

    let mut body = Vec::new();
    body.try_reserve_exact(len).map_err(|_| Fault::Alloc(expected))?;

    file.take(expected)
        .read_to_end(&mut body)
        .await
        .map_err(Fault::Read)?;

    let actual = body.len() as u64;
    if actual != expected {
        return Err(Fault::ShortRead { expected, actual }.into());
    }

    Ok(body)
}
